//! Cyllene - Minimal HTTPS Static File Server
//!
//! Core library for request resolution and TLS connection handling.

pub mod config;
pub mod http;
pub mod resolver;
pub mod server;
