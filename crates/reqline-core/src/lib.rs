pub mod config;
pub mod headers;
pub mod logging;
pub mod timeout;
pub mod url_model;

pub use timeout::{Timeout, TimeoutValue};
pub use url_model::{parse_url, ParseError, Url};
