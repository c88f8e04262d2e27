//! Connection target `(scheme, host, port)` derived from a request target.

use super::{parse_url, ParseError};

/// Scheme assumed when the input has none.
pub const DEFAULT_SCHEME: &str = "http";

/// What a connection layer needs to open a socket for a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    pub scheme: String,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Parses `url` and returns its scheme (defaulting to `http`), host and port.
pub fn get_host(url: &str) -> Result<Origin, ParseError> {
    let parsed = parse_url(url)?;
    Ok(Origin {
        scheme: parsed.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
        host: parsed.host,
        port: parsed.port,
    })
}
