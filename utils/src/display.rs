//! Text formatting helpers shared by the CLI and library error messages.

/// Render a distance with two decimals, e.g. `"12.34 meters"`.
pub fn format_meters(meters: f64) -> String {
    format!("{meters:.2} meters")
}

/// Shorten a title to `max` characters, appending `...` when cut.
pub fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let head: String = title.chars().take(max).collect();
    format!("{head}...")
}
