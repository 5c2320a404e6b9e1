use std::collections::HashMap;
use std::io;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

use crate::http::version::Version;

/// A parsed HTTP request: the request line plus the header mapping, together
/// with the read half of the connection for subsequent raw body reads.
///
/// Header names are normalized at parse time: lower-cased, with `-` replaced
/// by `_`. `User-Agent`, `USER_AGENT` and `user-agent` all live under the key
/// `user_agent`. The record is immutable once constructed.
#[derive(Debug)]
pub struct Request<R> {
    method: String,
    path: String,
    version: Version,
    headers: HashMap<String, String>,
    reader: R,
    read_timeout: Duration,
}

impl<R> Request<R> {
    pub(crate) fn new(
        method: String,
        path: String,
        version: Version,
        headers: HashMap<String, String>,
        reader: R,
        read_timeout: Duration,
    ) -> Self {
        Self {
            method,
            path,
            version,
            headers,
            reader,
            read_timeout,
        }
    }

    /// The request method, upper-cased. Not validated against a verb set.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request path, byte-for-byte as received (no decoding).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Looks up a header by its normalized name (e.g. `user_agent`).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// The `content_length` header parsed as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("content_length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}

impl<R> Request<R>
where
    R: AsyncRead + Unpin,
{
    /// Reads exactly `len` raw bytes of request body from the connection.
    ///
    /// The body is not framed by the parser; callers obtain `len` from
    /// [`content_length`](Self::content_length). Each read is raced against
    /// the same rolling deadline the parser used, so a stalled peer fails
    /// with `TimedOut`. A peer that closes early fails with `UnexpectedEof`.
    pub async fn read_body(&mut self, len: usize) -> io::Result<Bytes> {
        let mut body = BytesMut::with_capacity(len);
        while body.len() < len {
            let remaining = (len - body.len()) as u64;
            let mut take = (&mut self.reader).take(remaining);
            let n = timeout(self.read_timeout, take.read_buf(&mut body))
                .await
                .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "body read timed out"))??;

            if n == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed before full body received",
                ));
            }
        }
        Ok(body.freeze())
    }
}
