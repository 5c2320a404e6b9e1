use std::collections::HashMap;
use std::io;

use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::version::Version;

/// Errors from the response writer.
///
/// `StatusAlreadySent` is the only protocol-state error in the system: it is
/// recoverable and leaves the connection intact. Everything else is an I/O
/// error from the underlying stream, passed through verbatim.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("status line already sent")]
    StatusAlreadySent,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Output progress of a response. The status line may be written at most
/// once; the enum makes that a checked state transition instead of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputState {
    NotStarted,
    StatusSent,
}

/// Streaming writer for one HTTP response.
///
/// Created alongside a [`Request`](crate::http::request::Request) by
/// [`parse`](crate::http::parser::parse), holding the write half of the same
/// connection. Writes go straight to the stream; nothing is buffered.
///
/// The writer emits exactly what it is told and no more: `write_headers`
/// appends no line terminators and no blank line after the header block.
/// Callers supply any separators and the body themselves.
#[derive(Debug)]
pub struct ResponseWriter<W> {
    version: Version,
    status: u16,
    state: OutputState,
    headers: HashMap<String, String>,
    writer: W,
}

impl<W> ResponseWriter<W> {
    /// Creates a writer for `version` over the connection's write half.
    ///
    /// Normally obtained from [`parse`](crate::http::parser::parse), which
    /// copies the version out of the request it parsed.
    pub fn new(version: Version, writer: W) -> Self {
        Self {
            version,
            status: 200,
            state: OutputState::NotStarted,
            headers: HashMap::new(),
            writer,
        }
    }

    /// The protocol version copied from the parsed request.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The status code most recently written, defaulting to 200.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Stores a header for a later [`write_headers`](Self::write_headers).
    ///
    /// Overwrites any prior value for the same name. No character validation,
    /// no ordering guarantee, callable before or after the status line.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ResponseWriter<W>
where
    W: AsyncWrite + Unpin,
{
    /// Writes the status line without a reason phrase: `HTTP/<ver> <code>\r\n`.
    ///
    /// Fails with [`WriteError::StatusAlreadySent`], writing nothing, if a
    /// status line was already written on this response. Returns the number
    /// of bytes written.
    pub async fn write_status(&mut self, code: u16) -> Result<usize, WriteError> {
        self.write_status_line(code, None).await
    }

    /// Writes the status line with a reason phrase appended directly after
    /// the code (no separating space): `HTTP/<ver> <code><reason>\r\n`.
    pub async fn write_status_reason(
        &mut self,
        code: u16,
        reason: &str,
    ) -> Result<usize, WriteError> {
        self.write_status_line(code, Some(reason)).await
    }

    async fn write_status_line(
        &mut self,
        code: u16,
        reason: Option<&str>,
    ) -> Result<usize, WriteError> {
        if self.state != OutputState::NotStarted {
            return Err(WriteError::StatusAlreadySent);
        }

        // Segments go out one by one; the first failure aborts the rest.
        let mut written = self.write(b"HTTP/").await?;
        let digits = self.version.digits();
        written += self.write(digits.as_bytes()).await?;
        written += self.write(b" ").await?;
        written += self.write(code.to_string().as_bytes()).await?;
        if let Some(reason) = reason {
            written += self.write(reason.as_bytes()).await?;
        }
        written += self.write(b"\r\n").await?;

        self.status = code;
        self.state = OutputState::StatusSent;
        Ok(written)
    }

    /// Writes every stored header as `name: value`.
    ///
    /// No terminator is appended after each pair and no blank line after the
    /// block; the caller owns all separators. Iteration order over the map is
    /// unspecified. Returns total bytes written, or the first write error.
    pub async fn write_headers(&mut self) -> Result<usize, WriteError> {
        let mut written = 0;
        for (name, value) in &self.headers {
            self.writer.write_all(name.as_bytes()).await?;
            self.writer.write_all(b": ").await?;
            self.writer.write_all(value.as_bytes()).await?;
            written += name.len() + 2 + value.len();
        }
        self.writer.flush().await?;
        Ok(written)
    }

    /// Raw pass-through to the connection.
    ///
    /// Used internally for status-line segments and exposed for out-of-band
    /// lines such as `HTTP/1.1 100 Continue\r\n\r\n` and response bodies.
    pub async fn write(&mut self, buf: &[u8]) -> Result<usize, WriteError> {
        self.writer.write_all(buf).await?;
        self.writer.flush().await?;
        Ok(buf.len())
    }
}
