//! HTTP protocol implementation.
//!
//! This module implements the one-request-per-connection HTTP/1.1 subset
//! served over TLS.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`request`**: Raw request capture and access-log helpers
//! - **`parser`**: Method extraction and target isolation from the request line
//! - **`status`**: The four supported response status codes and their status lines
//! - **`mime`**: MIME type detection based on file extensions
//! - **`header`**: Bounded response header construction
//!
//! A request flows through `parser` → `resolver` → `header`; the connection
//! state machine that drives this lives in [`crate::server::connection`].

pub mod header;
pub mod mime;
pub mod parser;
pub mod request;
pub mod status;
