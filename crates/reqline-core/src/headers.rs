//! Request header shortcuts.
//!
//! Builds the small set of headers a client commonly toggles (compression,
//! keep-alive, user agent, basic credentials) as lower-case name/value pairs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::collections::BTreeMap;

/// Encodings advertised when compression is simply switched on.
pub const DEFAULT_ACCEPT_ENCODING: &str = "gzip,deflate";

/// Value for `accept-encoding`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptEncoding {
    /// `gzip,deflate`.
    Default,
    /// Used verbatim.
    Value(String),
    /// Joined with `,`.
    List(Vec<String>),
}

impl AcceptEncoding {
    fn header_value(&self) -> String {
        match self {
            AcceptEncoding::Default => DEFAULT_ACCEPT_ENCODING.to_string(),
            AcceptEncoding::Value(v) => v.clone(),
            AcceptEncoding::List(items) => items.join(","),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    pub keep_alive: bool,
    pub accept_encoding: Option<AcceptEncoding>,
    pub user_agent: Option<String>,
    /// `user:password`, sent as HTTP Basic credentials.
    pub basic_auth: Option<String>,
}

/// Header map for `options`. Only switched-on headers are present.
pub fn make_headers(options: &HeaderOptions) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();

    if let Some(encoding) = &options.accept_encoding {
        headers.insert("accept-encoding".to_string(), encoding.header_value());
    }
    if let Some(user_agent) = &options.user_agent {
        headers.insert("user-agent".to_string(), user_agent.clone());
    }
    if options.keep_alive {
        headers.insert("connection".to_string(), "keep-alive".to_string());
    }
    if let Some(credentials) = &options.basic_auth {
        headers.insert(
            "authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials.as_bytes())),
        );
    }

    headers
}
