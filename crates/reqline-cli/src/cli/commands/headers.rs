//! `reqline headers` – show the request headers a client would send.

use reqline_core::config::ReqlineConfig;
use reqline_core::headers::{make_headers, AcceptEncoding, HeaderOptions};

/// Command-line switches layered on top of the config file.
#[derive(Debug, Default)]
pub struct HeaderFlags {
    pub keep_alive: bool,
    /// `Some(None)` for a bare `--accept-encoding`.
    pub accept_encoding: Option<Option<String>>,
    pub user_agent: Option<String>,
    pub basic_auth: Option<String>,
}

pub fn run_headers(cfg: &ReqlineConfig, flags: HeaderFlags) {
    let headers = make_headers(&header_options(cfg, flags));
    tracing::debug!(count = headers.len(), "assembled headers");
    for (name, value) in headers {
        println!("{name}: {value}");
    }
}

fn header_options(cfg: &ReqlineConfig, flags: HeaderFlags) -> HeaderOptions {
    let mut options = cfg.header_options();
    options.keep_alive |= flags.keep_alive;
    if let Some(encoding) = flags.accept_encoding {
        options.accept_encoding = Some(encoding.map_or(AcceptEncoding::Default, AcceptEncoding::Value));
    }
    if flags.user_agent.is_some() {
        options.user_agent = flags.user_agent;
    }
    if flags.basic_auth.is_some() {
        options.basic_auth = flags.basic_auth;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_layer_over_config() {
        let cfg = ReqlineConfig {
            compress: true,
            ..ReqlineConfig::default()
        };
        let flags = HeaderFlags {
            keep_alive: true,
            user_agent: Some("reqline-test/2".to_string()),
            basic_auth: Some("foo:bar".to_string()),
            ..HeaderFlags::default()
        };
        let headers = make_headers(&header_options(&cfg, flags));
        assert_eq!(headers["accept-encoding"], "gzip,deflate");
        assert_eq!(headers["connection"], "keep-alive");
        assert_eq!(headers["user-agent"], "reqline-test/2");
        assert_eq!(headers["authorization"], "Basic Zm9vOmJhcg==");
    }

    #[test]
    fn explicit_encoding_list() {
        let flags = HeaderFlags {
            accept_encoding: Some(Some("br,gzip".to_string())),
            ..HeaderFlags::default()
        };
        let options = header_options(&ReqlineConfig::default(), flags);
        assert_eq!(
            options.accept_encoding,
            Some(AcceptEncoding::Value("br,gzip".to_string()))
        );
        assert!(!options.keep_alive);
    }
}
