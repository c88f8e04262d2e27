//! CLI command handlers, one file per subcommand.

mod headers;
mod host;
mod parse;
mod timeout;

pub use headers::{run_headers, HeaderFlags};
pub use host::run_host;
pub use parse::run_parse;
pub use timeout::{run_timeout, TimeoutFlags};
