use anyhow::Context;
use gsadmin_client::ClientError;
use std::io::{BufRead, Write};

use super::Ctx;

pub async fn login(ctx: &mut Ctx, email: &str, password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };
    let session = ctx.client.login(email, &password).await?.clone();
    ctx.store.save(&session)?;
    ctx.out.emit(&session.user, || {
        format!("Signed in as {} <{}>", session.user.username, session.user.email)
    })
}

pub async fn logout(ctx: &mut Ctx) -> anyhow::Result<()> {
    ctx.client.logout().await;
    ctx.store.clear()?;
    ctx.out
        .emit(&serde_json::json!({"signedOut": true}), || "Signed out".to_string())
}

pub fn whoami(ctx: &Ctx) -> anyhow::Result<()> {
    let session = ctx.client.session().ok_or(ClientError::NotAuthenticated)?;
    ctx.out.emit(&session.user, || {
        format!(
            "{} <{}> ({})",
            session.user.username, session.user.email, session.user.role
        )
    })
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
