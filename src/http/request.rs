/// HTTP request methods recognized by the server.
///
/// Only GET and HEAD are served; everything else resolves to
/// 405 Method Not Allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// HEAD - Like GET, resolved identically
    Head,
    /// Any other method token
    Unsupported,
}

/// Maximum number of bytes captured from a connection for one request.
pub const MAX_REQUEST: usize = 1 << 20;

/// The raw bytes of one request, captured from a single read of the
/// connection and immutable afterwards.
///
/// The capture is bounded by [`MAX_REQUEST`]; anything the client sends
/// beyond that is never read. Truncated or garbage input is handled
/// downstream as a malformed request, not an error here.
#[derive(Debug)]
pub struct RawRequest {
    bytes: Vec<u8>,
}

impl RawRequest {
    pub fn new(mut bytes: Vec<u8>) -> Self {
        bytes.truncate(MAX_REQUEST);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The request line, for access logging. Everything up to the first
    /// CR or LF, lossily decoded.
    pub fn request_line(&self) -> String {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == b'\r' || b == b'\n')
            .unwrap_or(self.bytes.len());
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }

    /// The value of the Host header with any `:port` suffix removed,
    /// for access logging.
    pub fn host(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.bytes);
        for line in text.lines().skip(1) {
            if let Some(value) = line.strip_prefix("Host:") {
                let host = value.trim().split(':').next().unwrap_or("").to_string();
                return Some(host);
            }
        }
        None
    }
}
