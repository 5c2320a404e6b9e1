use std::collections::HashMap;
use std::io;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::http::reader::read_until;
use crate::http::request::Request;
use crate::http::version::Version;
use crate::http::writer::ResponseWriter;

/// Incrementally parses one request line and header block off `reader`.
///
/// The stream is consumed a byte at a time, each byte under `read_timeout`,
/// so nothing is buffered ahead and no request length needs to be known in
/// advance. On success returns the immutable [`Request`] (owning `reader`
/// for body reads) paired with a fresh [`ResponseWriter`] over `writer`,
/// version copied from the request.
///
/// There is no malformed-request error: a missing delimiter just grows the
/// current token until a real delimiter or an I/O failure, and an
/// unrecognized version quietly becomes [`Version::Unknown`]. Every error
/// this function returns is an I/O error from the stream (timeout, reset,
/// EOF), propagated verbatim.
pub async fn parse<R, W>(
    mut reader: R,
    writer: W,
    read_timeout: Duration,
) -> io::Result<(Request<R>, ResponseWriter<W>)>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let method = read_until(&mut reader, b' ', read_timeout)
        .await?
        .to_uppercase();
    let path = read_until(&mut reader, b' ', read_timeout).await?;
    let version_token = read_until(&mut reader, b'\n', read_timeout).await?;
    let version = Version::from_token(&version_token);

    let mut headers = HashMap::new();
    loop {
        let name = read_until(&mut reader, b':', read_timeout).await?;
        if name.is_empty() {
            // Blank line: end of the header block. An empty name is never
            // stored; it is indistinguishable from end-of-headers.
            break;
        }

        let value = read_until(&mut reader, b'\n', read_timeout).await?;
        headers.insert(
            name.to_lowercase().replace('-', "_"),
            value.trim_start_matches(' ').to_string(),
        );
    }

    let request = Request::new(method, path, version, headers, reader, read_timeout);
    let response = ResponseWriter::new(version, writer);
    Ok((request, response))
}
