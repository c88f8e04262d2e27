//! Request-target URL model.
//!
//! Splits absolute and relative request targets into scheme, userinfo, host,
//! port, path, query and fragment, and rebuilds the views a client needs
//! (`host:port` to connect, path plus query for the request line).

mod error;
mod host;
mod parse;
mod split;
mod url;

pub use error::{ParseError, ParseErrorKind};
pub use host::{get_host, Origin, DEFAULT_SCHEME};
pub use parse::parse_url;
pub use split::split_first;
pub use url::Url;

#[cfg(test)]
mod tests;
