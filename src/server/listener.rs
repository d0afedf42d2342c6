use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

const BACKLOG: u32 = 1024;

/// Source of accepted connections for [`serve`].
pub trait Accept: Send + Sync + 'static {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    fn accept(&self) -> impl Future<Output = io::Result<(Self::Stream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    type Stream = TcpStream;

    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// Binds the listening socket with address reuse enabled.
pub async fn bind(listen_addr: &str) -> anyhow::Result<TcpListener> {
    let addr = tokio::net::lookup_host(listen_addr)
        .await
        .with_context(|| format!("failed to resolve listen address {}", listen_addr))?
        .next()
        .with_context(|| format!("no address found for {}", listen_addr))?;

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    let listener = socket.listen(BACKLOG)?;
    info!(addr = %listener.local_addr()?, "Listening");
    Ok(listener)
}

pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let listener = bind(&cfg.server.listen_addr).await?;
    serve(listener, cfg).await
}

/// Accepts connections forever, one task per connection.
///
/// A failed accept is logged and skipped. With `max_connections` set,
/// accepting waits for a free slot once that many connections are in
/// flight.
pub async fn serve<A: Accept>(acceptor: A, cfg: Arc<Config>) -> anyhow::Result<()> {
    info!(directory = %cfg.files.directory.display(), "Serving files");

    let limit = match cfg.server.max_connections {
        0 => None,
        n => Some(Arc::new(Semaphore::new(n))),
    };
    let router = Router::new(cfg);

    loop {
        let permit = match &limit {
            Some(sem) => Some(sem.clone().acquire_owned().await?),
            None => None,
        };

        let (socket, peer) = match acceptor.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        info!(%peer, "Accepted connection");

        let router = router.clone();
        tokio::spawn(async move {
            let _permit = permit;
            let mut conn = Connection::new(socket, router);
            if let Err(e) = conn.run().await {
                tracing::error!(%peer, error = %format!("{:#}", e), "Connection error");
            }
        });
    }
}
