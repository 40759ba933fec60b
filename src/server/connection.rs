use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::server::TlsStream;

use crate::http::header;
use crate::http::request::{MAX_REQUEST, RawRequest};
use crate::resolver::Resolver;
use crate::server::access_log;

/// One accepted connection. Exclusively owns the socket and, once the
/// handshake completes, the TLS session; both are released on every exit
/// path when the connection is dropped (session before socket, since the
/// session wraps it).
pub struct Connection {
    acceptor: TlsAcceptor,
    resolver: Arc<Resolver>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Accepted(TcpStream),
    TlsEstablishing(TcpStream),
    TlsActive(TlsStream<TcpStream>),
    Closed,
}

impl Connection {
    pub fn new(socket: TcpStream, acceptor: TlsAcceptor, resolver: Arc<Resolver>) -> Self {
        Self {
            acceptor,
            resolver,
            state: ConnectionState::Accepted(socket),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Accepted(socket) => {
                    self.state = ConnectionState::TlsEstablishing(socket);
                }

                ConnectionState::TlsEstablishing(socket) => {
                    // The socket is dropped here on failure; the request is
                    // never read.
                    match self.acceptor.accept(socket).await {
                        Ok(tls) => self.state = ConnectionState::TlsActive(tls),
                        Err(e) => {
                            return Err(anyhow::anyhow!("TLS handshake failed: {e}"));
                        }
                    }
                }

                ConnectionState::TlsActive(mut tls) => {
                    let served = self.serve(&mut tls).await;

                    // Graceful close_notify is best-effort; failure to
                    // notify is logged, not escalated.
                    if let Err(e) = tls.shutdown().await {
                        tracing::debug!("TLS shutdown failed: {}", e);
                    }

                    drop(tls);
                    return served;
                }

                ConnectionState::Closed => return Ok(()),
            }
        }
    }

    /// Read one request, resolve it, write header then file bytes. Any
    /// failure aborts this connection only.
    async fn serve(&self, tls: &mut TlsStream<TcpStream>) -> anyhow::Result<()> {
        // One bounded read captures the whole request; bodies are never
        // read.
        let mut buf = vec![0u8; MAX_REQUEST];
        let bytes_read = tls
            .read(&mut buf)
            .await
            .context("failed to read from connection")?;
        if bytes_read == 0 {
            anyhow::bail!("connection closed before a request was read");
        }
        buf.truncate(bytes_read);
        let raw = RawRequest::new(buf);

        let target = self.resolver.resolve(&raw);

        let header = header::build_header(target.status, &target.path.to_string_lossy())
            .map_err(|_| anyhow::anyhow!("response header exceeds {} bytes", header::MAX_HEADER))?;

        tls.write_all(&header)
            .await
            .context("failed to write header to connection")?;

        // The resolver guarantees the path exists, so a read failure here
        // is a mid-response I/O error and drops the connection.
        let body = tokio::fs::read(&target.path)
            .await
            .with_context(|| format!("failed to read {}", target.path.display()))?;

        tls.write_all(&body)
            .await
            .context("failed to write file to connection")?;

        access_log::log_request(&raw, target.status, header.len() + body.len());

        Ok(())
    }
}
