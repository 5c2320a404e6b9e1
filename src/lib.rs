//! Trickle - Incremental HTTP/1.x Server Core
//!
//! Byte-at-a-time request parsing with per-byte read deadlines, paired with
//! a streaming response writer on the same connection.

pub mod config;
pub mod http;
pub mod server;
