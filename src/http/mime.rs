//! MIME type detection based on file extensions.
//!
//! The table is kept sorted by extension so lookup can binary search it.

/// Content type served when the extension is unknown or absent.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

// Sorted by extension, ascending ASCII. Lookup relies on this ordering.
static MIME_TABLE: [(&str, &str); 14] = [
    ("css", "text/css"),
    ("gif", "image/gif"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("png", "image/png"),
    ("svg", "image/svg+xml"),
    ("ttf", "font/ttf"),
    ("xml", "application/xml"),
];

/// Returns the Content-Type for a file path based on the substring after
/// the last `.`, or [`DEFAULT_CONTENT_TYPE`] if there is no extension or
/// the extension is unknown. Matching is case-sensitive.
///
/// # Example
///
/// ```
/// # use cyllene::http::mime::content_type_for;
/// assert_eq!(content_type_for("/site/index.html"), "text/html");
/// assert_eq!(content_type_for("/site/archive.bin"), "application/octet-stream");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    match file_extension(path) {
        Some(ext) => MIME_TABLE
            .binary_search_by(|(e, _)| e.cmp(&ext))
            .map(|i| MIME_TABLE[i].1)
            .unwrap_or(DEFAULT_CONTENT_TYPE),
        None => DEFAULT_CONTENT_TYPE,
    }
}

/// The substring after the last `.` in the path, if any.
fn file_extension(path: &str) -> Option<&str> {
    path.rsplit_once('.').map(|(_, ext)| ext)
}
