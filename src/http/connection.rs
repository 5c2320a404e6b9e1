use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

use crate::config::Config;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// One accepted connection: parse a single request, answer it, close.
///
/// The socket is split into owned halves so the request keeps the read side
/// for body reads while the response writer owns the write side. Both halves
/// drop when the task finishes, which is what closes the connection; there
/// is no other teardown path.
pub struct Connection {
    stream: TcpStream,
    config: Config,
}

impl Connection {
    pub fn new(stream: TcpStream, config: Config) -> Self {
        Self { stream, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let (read_half, write_half) = self.stream.into_split();
        let (request, response) =
            parser::parse(read_half, write_half, self.config.read_timeout()).await?;

        Self::handle(request, response, &self.config).await
    }

    /// Demo handler: log the request, accept an optional fixed-length body
    /// into the upload path, reply 200 with a header block.
    async fn handle(
        mut request: Request<OwnedReadHalf>,
        mut response: ResponseWriter<OwnedWriteHalf>,
        config: &Config,
    ) -> anyhow::Result<()> {
        tracing::info!(
            method = request.method(),
            path = request.path(),
            version = ?request.version(),
            "request received"
        );

        if request.header("expect").is_some() {
            response.write(b"HTTP/1.1 100 Continue\r\n\r\n").await?;
        }

        let content_length = request.content_length();
        if content_length > 0 {
            let body = request.read_body(content_length).await?;
            tokio::fs::write(&config.upload_path, &body).await?;
            tracing::info!(
                bytes = body.len(),
                path = %config.upload_path.display(),
                "body persisted"
            );
        }

        response.write_status_reason(200, "OK").await?;
        response.add_header("host", "localhost");
        response.write_headers().await?;

        Ok(())
    }
}
