//! HTTP protocol implementation.
//!
//! This module implements a minimal incremental HTTP/1.x server core: the
//! request line and headers are parsed straight off the socket, one byte at
//! a time, and the response is written back onto the same socket.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`reader`**: the delimiter reader, a byte-at-a-time tokenizer with a
//!   rolling per-byte read deadline
//! - **`parser`**: drives the reader over the request line and header block
//! - **`request`**: the immutable parsed request, plus raw body reads
//! - **`writer`**: the streaming response writer (status line, headers, raw
//!   bytes) with its once-only status-line state machine
//! - **`version`**: the closed protocol-version enumeration
//! - **`connection`**: the per-connection worker tying the above together
//!
//! # Request lifecycle
//!
//! ```text
//!   accept (server::listener)
//!      │
//!      ▼
//!   parse ── one byte at a time, ≤100 ms per byte ──► Request + ResponseWriter
//!      │
//!      ▼
//!   handler ── optional body read, then status line + headers ──► close
//! ```
//!
//! Parsing never buffers ahead of the current token and never needs the
//! request length. There is no keep-alive: one request per connection, and
//! dropping the split socket halves at task exit is what closes it.
//!
//! # Example
//!
//! ```ignore
//! use trickle::http::parser;
//! use trickle::http::reader::READ_TIMEOUT;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let (rd, wr) = socket.into_split();
//!             let (request, mut response) = parser::parse(rd, wr, READ_TIMEOUT).await?;
//!             println!("{} {}", request.method(), request.path());
//!             response.write_status(200).await?;
//!             anyhow::Ok(())
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod parser;
pub mod reader;
pub mod request;
pub mod version;
pub mod writer;
