use std::io;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time::timeout;

/// Default window a single byte read may block before the parse is aborted.
pub const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Reads single bytes from `stream` until `delim` is seen, accumulating them
/// into a token. The delimiter itself is not appended.
///
/// Every byte read is raced against a fresh `read_timeout` window; a stalled
/// peer surfaces as `io::ErrorKind::TimedOut`. Carriage returns are dropped
/// wherever they occur. While seeking `b':'` (a header name), a line feed
/// ends the header section: the call returns an empty token immediately,
/// discarding anything accumulated on that line.
///
/// Any underlying read error aborts the call; no partial token is returned.
pub async fn read_until<R>(stream: &mut R, delim: u8, read_timeout: Duration) -> io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut token = String::new();
    loop {
        let byte = timeout(read_timeout, stream.read_u8())
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "read timed out"))??;

        if byte == delim {
            break;
        }
        if byte == b'\n' && delim == b':' {
            // Blank line (or a header line with no colon): header section done.
            return Ok(String::new());
        }
        if byte != b'\r' {
            token.push(byte as char);
        }
    }
    Ok(token)
}
