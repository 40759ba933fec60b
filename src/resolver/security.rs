//! Path validation and normalization.
//!
//! Traversal detection matches literal substrings without URL-decoding.
//! Encoded forms outside the fixed list (e.g. mixed-case `%2E%2e%2f`) are
//! not caught; this reproduces the documented detection contract, and any
//! change to it is a security-contract change, not a cleanup.

// Basic, URL-encoded, double-encoded and backslash variants.
static TRAVERSAL_PATTERNS: [&str; 10] = [
    "../",
    "%2e%2e%2f",
    "%2e%2e/",
    "..%2f",
    "%2e%2e%5c",
    "%2e%2e\\",
    "..%5c",
    "%252e%252e%255c",
    "..%255c",
    "..\\",
];

/// Returns true if the path contains any known directory traversal
/// pattern, at any position. Matching is case-sensitive substring search.
pub fn contains_traversal(path: &str) -> bool {
    TRAVERSAL_PATTERNS
        .iter()
        .any(|pattern| path.contains(pattern))
}

/// Collapses runs of consecutive `/` into one and strips a single
/// trailing `/`. Must run before [`contains_traversal`]; it never removes
/// `..` segments, only redundant slashes.
pub fn normalize(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    let mut prev_slash = false;

    for c in path.chars() {
        if c == '/' && prev_slash {
            continue;
        }
        prev_slash = c == '/';
        normalized.push(c);
    }

    if normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}
