use crate::http::request::RawRequest;
use crate::http::status::StatusCode;

/// One access-log line per served request: requesting host, the raw
/// request line, the resolved status and the total bytes written.
pub fn log_request(raw: &RawRequest, status: StatusCode, response_size: usize) {
    tracing::info!(
        host = %raw.host().unwrap_or_default(),
        request = %raw.request_line(),
        status = status.as_u16(),
        size = response_size,
        "Request served"
    );
}
