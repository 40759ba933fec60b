/// HTTP status codes emitted by the server.
///
/// The resolver produces exactly one of these per request:
/// - `Ok` (200): File found and served
/// - `Forbidden` (403): Directory traversal attempt detected
/// - `NotFound` (404): Requested file absent, or malformed request line
/// - `MethodNotAllowed` (405): Method other than GET/HEAD
///
/// Restricting the enum to these four codes means an unsupported status
/// can never reach the header builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use cyllene::http::status::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the full HTTP/1.1 status line for this code, without the
    /// trailing CRLF.
    ///
    /// # Example
    ///
    /// ```
    /// # use cyllene::http::status::StatusCode;
    /// assert_eq!(StatusCode::Forbidden.status_line(), "HTTP/1.1 403 Forbidden");
    /// ```
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "HTTP/1.1 200 OK",
            StatusCode::Forbidden => "HTTP/1.1 403 Forbidden",
            StatusCode::NotFound => "HTTP/1.1 404 Not Found",
            StatusCode::MethodNotAllowed => "HTTP/1.1 405 Method Not Allowed",
        }
    }

    /// Name of the error page file served for this status (`None` for 200).
    pub fn error_page(&self) -> Option<&'static str> {
        match self {
            StatusCode::Ok => None,
            StatusCode::Forbidden => Some("403.html"),
            StatusCode::NotFound => Some("404.html"),
            StatusCode::MethodNotAllowed => Some("405.html"),
        }
    }
}
