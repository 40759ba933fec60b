use crate::http::mime;
use crate::http::status::StatusCode;

/// Hard maximum size of a serialized response header.
pub const MAX_HEADER: usize = 1024;

/// Name reported in the `Server` header.
pub const SERVER_NAME: &str = "Cyllene";

#[derive(Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Appending a component would exceed [`MAX_HEADER`]. The header is
    /// never truncated; the connection is dropped instead.
    Overflow,
}

/// A response header under construction, capped at [`MAX_HEADER`] bytes.
///
/// Each append is checked against remaining capacity and fails with
/// [`HeaderError::Overflow`] rather than truncating.
pub struct HeaderBuffer {
    buf: Vec<u8>,
}

impl HeaderBuffer {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(MAX_HEADER),
        }
    }

    pub fn push(&mut self, part: &[u8]) -> Result<(), HeaderError> {
        if self.buf.len() + part.len() > MAX_HEADER {
            return Err(HeaderError::Overflow);
        }
        self.buf.extend_from_slice(part);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for HeaderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the complete response header for a resolved target:
///
/// ```text
/// <STATUS-LINE>\r\n
/// Server: Cyllene\r\n
/// Content-Type: <mime-or-default>\r\n\r\n
/// ```
///
/// The content type is derived from the target path's extension; no
/// `Content-Length` or connection-reuse headers are emitted.
pub fn build_header(status: StatusCode, target_path: &str) -> Result<Vec<u8>, HeaderError> {
    let mut header = HeaderBuffer::new();

    header.push(status.status_line().as_bytes())?;
    header.push(b"\r\n")?;

    header.push(format!("Server: {SERVER_NAME}\r\n").as_bytes())?;

    let content_type = mime::content_type_for(target_path);
    header.push(format!("Content-Type: {content_type}\r\n\r\n").as_bytes())?;

    Ok(header.into_bytes())
}
