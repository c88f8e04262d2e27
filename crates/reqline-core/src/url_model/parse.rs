//! Index scanner that decomposes a request target into a [`Url`].
//!
//! Deliberately narrower than a general URI grammar: unbracketed IPv6 hosts and
//! non-numeric ports are rejected instead of being guessed at.

use super::error::{ParseError, ParseErrorKind};
use super::split::split_first;
use super::Url;

/// Characters that end the authority section.
const AUTHORITY_TERMINATORS: [char; 3] = ['/', '?', '#'];

/// Parses an absolute (`http://host/p`) or relative (`host/p`, `/p`, `?q`) request target.
///
/// Fails only on an unterminated `[`, a port that is not an integer in
/// `0..=65535`, or a host with more than one colon outside brackets.
pub fn parse_url(input: &str) -> Result<Url, ParseError> {
    let (scheme, rest) = split_scheme(input);

    let (rest, fragment) = match rest.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (rest, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((before, query)) => (before, Some(query)),
        None => (rest, None),
    };

    let (host_spec, path) =
        split_authority(rest).map_err(|kind| ParseError::new(kind, input))?;

    // A `?` or `#` directly after the authority still means the path was present, just empty.
    let path = match path {
        Some(path) => Some(path),
        None if query.is_some() || fragment.is_some() => Some(""),
        None => None,
    };

    let (auth, host_port) = match host_spec.rsplit_once('@') {
        Some((auth, host_port)) => (Some(auth), host_port),
        None => (None, host_spec),
    };
    let (host, port) = split_port(host_port).map_err(|kind| ParseError::new(kind, input))?;

    let url = Url {
        scheme: scheme.map(str::to_ascii_lowercase),
        auth: auth.map(str::to_string),
        host: host.filter(|h| !h.is_empty()).map(str::to_string),
        port,
        path: path.map(str::to_string),
        query: query.map(str::to_string),
        fragment: fragment.map(str::to_string),
    };
    tracing::trace!(input, ?url, "parsed url");
    Ok(url)
}

/// Splits off a leading `scheme://`. A `://` that only appears after the first
/// `/`, `?` or `#` belongs to the path, query or fragment and is not a scheme.
fn split_scheme(input: &str) -> (Option<&str>, &str) {
    let (head, _, _) = split_first(input, &AUTHORITY_TERMINATORS);
    match head.strip_suffix(':') {
        Some(scheme) if input[head.len()..].starts_with("//") => {
            (Some(scheme), &input[head.len() + 2..])
        }
        _ => (None, input),
    }
}

/// Splits `rest` (query and fragment already removed) at the first `/` outside
/// brackets. Returns the host-spec and, if a `/` was found, the path including it.
fn split_authority(rest: &str) -> Result<(&str, Option<&str>), ParseErrorKind> {
    let mut in_brackets = false;
    for (idx, b) in rest.bytes().enumerate() {
        match b {
            // A nested `[` would be closed by the same `]` and leave one unmatched.
            b'[' if in_brackets => return Err(ParseErrorKind::UnterminatedIpv6),
            b'[' => in_brackets = true,
            b']' => in_brackets = false,
            b'/' if in_brackets => return Err(ParseErrorKind::UnterminatedIpv6),
            b'/' => return Ok((&rest[..idx], Some(&rest[idx..]))),
            _ => {}
        }
    }
    if in_brackets {
        return Err(ParseErrorKind::UnterminatedIpv6);
    }
    Ok((rest, None))
}

/// Splits `host[:port]` on its only bare colon.
fn split_port(host_port: &str) -> Result<(Option<&str>, Option<u16>), ParseErrorKind> {
    let mut in_brackets = false;
    let mut bare_colons = 0usize;
    let mut last_colon = None;
    for (idx, b) in host_port.bytes().enumerate() {
        match b {
            b'[' => in_brackets = true,
            b']' => in_brackets = false,
            b':' if !in_brackets => {
                bare_colons += 1;
                last_colon = Some(idx);
            }
            _ => {}
        }
    }

    match (bare_colons, last_colon) {
        (0, _) => Ok((Some(host_port), None)),
        (1, Some(idx)) => {
            let port = parse_port(&host_port[idx + 1..])?;
            Ok((Some(&host_port[..idx]), Some(port)))
        }
        _ => Err(ParseErrorKind::AmbiguousHost(host_port.to_string())),
    }
}

fn parse_port(text: &str) -> Result<u16, ParseErrorKind> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidPort(text.to_string()));
    }
    text.parse::<u16>()
        .map_err(|_| ParseErrorKind::InvalidPort(text.to_string()))
}
