//! `reqline parse <url>` – show every component of a URL.

use anyhow::Result;
use reqline_core::url_model::{parse_url, Url};

pub fn run_parse(url: &str, json: bool) -> Result<()> {
    let parsed = parse_url(url)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        for line in render(&parsed) {
            println!("{line}");
        }
    }
    Ok(())
}

/// One `name: value` line per field. Absent fields show `-`, present ones are
/// quoted so an empty query or path stays visible.
fn render(url: &Url) -> Vec<String> {
    fn show(value: Option<&str>) -> String {
        value.map_or_else(|| "-".to_string(), |v| format!("{v:?}"))
    }

    let port = url.port.map(|p| p.to_string());
    vec![
        format!("scheme:      {}", show(url.scheme.as_deref())),
        format!("auth:        {}", show(url.auth.as_deref())),
        format!("host:        {}", show(url.host.as_deref())),
        format!("port:        {}", port.as_deref().unwrap_or("-")),
        format!("path:        {}", show(url.path.as_deref())),
        format!("query:       {}", show(url.query.as_deref())),
        format!("fragment:    {}", show(url.fragment.as_deref())),
        format!("netloc:      {}", url.netloc()),
        format!("request_uri: {}", url.request_uri()),
        format!("url:         {url}"),
    ]
}
