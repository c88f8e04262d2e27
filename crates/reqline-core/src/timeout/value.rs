//! Tri-state timeout values and the loosely typed input they are parsed from.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::{ConfigError, TimeoutField};

/// A phase timeout as handed to the socket layer.
///
/// `Default` defers to whatever the socket layer uses when nothing is configured;
/// `Unbounded` explicitly disables the timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeoutValue {
    #[default]
    Default,
    Unbounded,
    Value(Duration),
}

/// Sentinel meaning "use the library default".
pub const DEFAULT_TIMEOUT: TimeoutValue = TimeoutValue::Default;

impl TimeoutValue {
    /// Validates a number of seconds given for `field`.
    ///
    /// Negative values and NaN are rejected; infinity and durations too large to
    /// represent are treated as unbounded.
    pub fn from_secs_f64(field: TimeoutField, secs: f64) -> Result<Self, ConfigError> {
        if secs.is_nan() {
            return Err(ConfigError::NotNumeric {
                field,
                value: "NaN".to_string(),
            });
        }
        if secs < 0.0 {
            return Err(ConfigError::Negative { field, value: secs });
        }
        Ok(Duration::try_from_secs_f64(secs)
            .map(TimeoutValue::Value)
            .unwrap_or(TimeoutValue::Unbounded))
    }

    /// The deadline to arm, or `None` when there is no explicit one.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            TimeoutValue::Value(d) => Some(*d),
            TimeoutValue::Default | TimeoutValue::Unbounded => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, TimeoutValue::Default)
    }
}

impl From<Duration> for TimeoutValue {
    fn from(d: Duration) -> Self {
        TimeoutValue::Value(d)
    }
}

/// `None` means no timeout at all, matching `Option<Duration>` socket setters.
impl From<Option<Duration>> for TimeoutValue {
    fn from(d: Option<Duration>) -> Self {
        d.map_or(TimeoutValue::Unbounded, TimeoutValue::Value)
    }
}

impl fmt::Display for TimeoutValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutValue::Default => f.write_str("default"),
            TimeoutValue::Unbounded => f.write_str("none"),
            TimeoutValue::Value(d) => write!(f, "{}", d.as_secs_f64()),
        }
    }
}

/// A timeout setting as written in a config file or on the command line.
///
/// Booleans count as 0 or 1 seconds. The text `"none"` means unbounded and
/// `"default"` the library default; any other text is rejected on
/// [`resolve`](Self::resolve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeoutInput {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl TimeoutInput {
    pub fn resolve(&self, field: TimeoutField) -> Result<TimeoutValue, ConfigError> {
        match self {
            TimeoutInput::Bool(b) => TimeoutValue::from_secs_f64(field, if *b { 1.0 } else { 0.0 }),
            TimeoutInput::Int(n) => TimeoutValue::from_secs_f64(field, *n as f64),
            TimeoutInput::Float(x) => TimeoutValue::from_secs_f64(field, *x),
            TimeoutInput::Text(s) if s.eq_ignore_ascii_case("none") => Ok(TimeoutValue::Unbounded),
            TimeoutInput::Text(s) if s.eq_ignore_ascii_case("default") => Ok(TimeoutValue::Default),
            TimeoutInput::Text(s) => Err(ConfigError::NotNumeric {
                field,
                value: s.clone(),
            }),
        }
    }
}

impl FromStr for TimeoutInput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(b) = s.parse::<bool>() {
            return Ok(TimeoutInput::Bool(b));
        }
        if let Ok(n) = s.parse::<i64>() {
            return Ok(TimeoutInput::Int(n));
        }
        if let Ok(x) = s.parse::<f64>() {
            return Ok(TimeoutInput::Float(x));
        }
        Ok(TimeoutInput::Text(s.to_string()))
    }
}

impl From<bool> for TimeoutInput {
    fn from(b: bool) -> Self {
        TimeoutInput::Bool(b)
    }
}

impl From<i64> for TimeoutInput {
    fn from(n: i64) -> Self {
        TimeoutInput::Int(n)
    }
}

impl From<f64> for TimeoutInput {
    fn from(x: f64) -> Self {
        TimeoutInput::Float(x)
    }
}

impl From<&str> for TimeoutInput {
    fn from(s: &str) -> Self {
        TimeoutInput::Text(s.to_string())
    }
}
