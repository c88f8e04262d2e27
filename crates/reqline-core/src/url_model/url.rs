//! The decomposed request target and its derived views.

use serde::Serialize;
use std::fmt;

/// A request target split into its structural components.
///
/// `None` means the component was absent from the input; `Some("")` means its
/// delimiter was present with nothing after it (`http://h/?` has an empty query,
/// `http://h/` has none). IPv6 hosts keep their brackets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Url {
    /// Lower-cased scheme, without `://`.
    pub scheme: Option<String>,
    /// Userinfo before the last `@` of the authority.
    pub auth: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    /// Query string, without the leading `?`.
    pub query: Option<String>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<String>,
}

impl Url {
    /// Host followed by `:port` when a port is present.
    pub fn host_port(&self) -> String {
        let host = self.host.as_deref().unwrap_or("");
        match self.port {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    /// Authority rebuilt from the parts that are present: `auth@host:port`.
    pub fn netloc(&self) -> String {
        match &self.auth {
            Some(auth) => format!("{auth}@{}", self.host_port()),
            None => self.host_port(),
        }
    }

    /// Path plus query as sent on the request line.
    ///
    /// An absent or empty path becomes `/`; the query is appended whenever it was
    /// present, even if empty.
    pub fn request_uri(&self) -> String {
        let mut uri = match self.path.as_deref() {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => "/".to_string(),
        };
        if let Some(query) = &self.query {
            uri.push('?');
            uri.push_str(query);
        }
        uri
    }
}

/// Reassembles a URL string that parses back to the same components.
impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}://")?;
        }
        f.write_str(&self.netloc())?;
        if let Some(path) = &self.path {
            f.write_str(path)?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
