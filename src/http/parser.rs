use crate::http::request::Method;

/// Bytes skipped from the start of the request line before the target:
/// the width of the longest supported method ("HEAD") plus its trailing
/// space. For GET the skip also consumes the target's leading slash;
/// joining under the website root and normalizing makes both forms
/// resolve identically.
const METHOD_SKIP: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    Malformed,
}

/// Decides the request method by fixed prefix comparison against the
/// literals "GET" and "HEAD". Anything else is `Unsupported`.
pub fn extract_method(raw: &[u8]) -> Method {
    if raw.starts_with(b"GET") {
        Method::Get
    } else if raw.starts_with(b"HEAD") {
        Method::Head
    } else {
        Method::Unsupported
    }
}

/// Isolates the target path from the request line: skip [`METHOD_SKIP`]
/// bytes, then take bytes up to the next space.
///
/// A target ending in `/` is a directory request, which the server does
/// not support; it is reported as malformed, as are an empty target and
/// one that is not valid UTF-8.
pub fn isolate_target(raw: &[u8]) -> Result<&str, ParseError> {
    if raw.len() <= METHOD_SKIP {
        return Err(ParseError::Malformed);
    }

    let rest = &raw[METHOD_SKIP..];
    let end = rest
        .iter()
        .position(|&b| b == b' ')
        .unwrap_or(rest.len());
    let target = &rest[..end];

    if target.is_empty() || target.ends_with(b"/") {
        return Err(ParseError::Malformed);
    }

    std::str::from_utf8(target).map_err(|_| ParseError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolate_simple_get() {
        let raw = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        // The fixed skip eats "GET /", leaving the target without its slash.
        assert_eq!(isolate_target(raw).unwrap(), "index.html");
    }
}
