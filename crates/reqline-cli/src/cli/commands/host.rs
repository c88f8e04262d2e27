//! `reqline host <url>` – connection target of a URL.

use anyhow::Result;
use reqline_core::url_model::{get_host, Origin};

pub fn run_host(url: &str) -> Result<()> {
    let origin = get_host(url)?;
    println!("{}", render(&origin));
    Ok(())
}

/// `scheme host port`, with `-` for a missing host or port.
fn render(origin: &Origin) -> String {
    let port = origin
        .port
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{} {} {}",
        origin.scheme,
        origin.host.as_deref().unwrap_or("-"),
        port
    )
}
