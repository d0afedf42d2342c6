use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::parser::read_request;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Owns one accepted stream for the lifetime of a single request.
///
/// There is no keep-alive: after one response is written (or the peer
/// goes away, or parsing fails) the stream is shut down and dropped.
pub struct Connection<S> {
    reader: BufReader<S>,
    router: Router,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Router) -> Self {
        Self {
            reader: BufReader::new(stream),
            router,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.drive().await;

        // Release the stream on every exit path; a failed shutdown only
        // matters if the request itself succeeded.
        let shutdown = self.reader.get_mut().shutdown().await;
        self.state = ConnectionState::Closed;

        result?;
        if let Err(e) = shutdown {
            tracing::debug!(error = %e, "Shutdown after response failed");
        }
        Ok(())
    }

    async fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Processing(req),
                        None => {
                            tracing::debug!("Peer closed before sending a request");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.dispatch(req).await?;
                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    let bytes = writer.write_to_stream(self.reader.get_mut()).await?;
                    tracing::debug!(bytes, "Response written");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let request = read_request(&mut self.reader)
            .await
            .context("HTTP parse error")?;

        if let Some(req) = &request {
            tracing::debug!(
                method = ?req.method,
                path = %req.path,
                version = %req.version,
                headers = req.headers.len(),
                body = req.body.len(),
                "Request parsed"
            );
        }

        Ok(request)
    }
}
