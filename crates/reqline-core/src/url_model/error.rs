//! Error type for request-target parsing.

use thiserror::Error;

/// A URL that could not be decomposed into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {input:?}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The full input handed to the parser.
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `[` opened an IPv6 literal that is never closed before the path or end of input.
    #[error("unterminated IPv6 literal")]
    UnterminatedIpv6,
    /// Port text after the host is empty, non-numeric or larger than 65535.
    #[error("invalid port {0:?}, must be an integer in 0..=65535")]
    InvalidPort(String),
    /// More than one colon outside brackets; an IPv6 host must be written as `[addr]`.
    #[error("ambiguous host {0:?}, IPv6 literals must be enclosed in brackets")]
    AmbiguousHost(String),
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}
