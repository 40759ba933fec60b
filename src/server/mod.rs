//! TLS server: acceptor loop and per-connection lifecycle.
//!
//! The listener accepts connections sequentially and hands each one to its
//! own task; a panic or error in one handler never affects the accept
//! loop or any other connection. The only state shared across handlers is
//! the read-only TLS configuration and the resolver, both immutable after
//! startup.
//!
//! # Connection State Machine
//!
//! Each connection serves exactly one request:
//!
//! ```text
//!        ┌───────────────┐
//!        │   Accepted    │ ← TCP connection accepted
//!        └──────┬────────┘
//!               │
//!               ▼
//!        ┌───────────────────┐
//!        │  TlsEstablishing  │ ← TLS handshake
//!        └──────┬────────────┘
//!               │ Handshake complete      Handshake failed → Closed
//!               ▼
//!        ┌───────────────────┐
//!        │    TlsActive      │ ← read request, resolve, write header + body
//!        └──────┬────────────┘
//!               │ Served, or any sub-step failed
//!               ▼
//!        ┌───────────────────┐
//!        │     Closed        │ ← session released, then socket
//!        └───────────────────┘
//! ```
//!
//! `Closed` is terminal; the TLS session and socket are released exactly
//! once on every path through the machine.

pub mod access_log;
pub mod connection;
pub mod listener;
pub mod tls;
