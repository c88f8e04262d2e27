//! Errors for timeout configuration and timer misuse.

use std::fmt;
use thiserror::Error;

/// Which of the three timeout settings a value was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutField {
    Connect,
    Read,
    Total,
}

impl fmt::Display for TimeoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeoutField::Connect => "connect",
            TimeoutField::Read => "read",
            TimeoutField::Total => "total",
        })
    }
}

/// Invalid timeout configuration, or a timer operation called out of order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} timeout was set to {value}, but it cannot be less than 0")]
    Negative { field: TimeoutField, value: f64 },

    #[error("{field} timeout must be an int or float, got {value:?}")]
    NotNumeric { field: TimeoutField, value: String },

    #[error("timeout timer has already been started")]
    AlreadyStarted,

    #[error("timeout timer has not been started")]
    NotStarted,
}
