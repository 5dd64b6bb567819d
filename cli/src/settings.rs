//! Effective configuration: TOML file as the base, flags and env on top.

use anyhow::Context;
use gsadmin_client::ClientConfig;
use gsadmin_utils::LogFormat;
use std::path::{Path, PathBuf};

/// Overrides collected from flags and `GSADMIN_*` env vars.
#[derive(Debug, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub session_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormat>,
    pub page_size: Option<u32>,
}

/// Load `path` if given, then apply `overrides`.
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<ClientConfig> {
    let base = match path {
        Some(p) => ClientConfig::from_toml_file(p)
            .with_context(|| format!("loading config from {}", p.display()))?,
        None => ClientConfig::default(),
    };
    Ok(ClientConfig {
        api_base: overrides.api_base.unwrap_or(base.api_base),
        session_file: overrides.session_file.unwrap_or(base.session_file),
        timeout_secs: overrides.timeout_secs.unwrap_or(base.timeout_secs),
        log_level: overrides.log_level.unwrap_or(base.log_level),
        log_format: overrides
            .log_format
            .map(|f| f.as_str().to_string())
            .unwrap_or(base.log_format),
        page_size: overrides.page_size.unwrap_or(base.page_size),
        ..base
    })
}

/// The configured log format. Unknown names are a config error.
pub fn log_format(config: &ClientConfig) -> anyhow::Result<LogFormat> {
    config
        .log_format
        .parse()
        .map_err(|e: String| anyhow::anyhow!("config error: log_format: {e}"))
}
