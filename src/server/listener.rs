use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;
use tracing::info;

use crate::resolver::Resolver;
use crate::server::connection::Connection;

/// Pending connections beyond this queue depth are refused by the OS.
const BACKLOG: i32 = 128;

pub async fn run(
    addr: SocketAddr,
    acceptor: TlsAcceptor,
    resolver: Arc<Resolver>,
) -> anyhow::Result<()> {
    let listener = bind(addr)?;
    info!("Started listening on {}", addr);

    serve(listener, acceptor, resolver).await
}

/// Accept connections sequentially, dispatching each to its own task. An
/// error in one handler never stops the accept loop.
pub async fn serve(
    listener: TcpListener,
    acceptor: TlsAcceptor,
    resolver: Arc<Resolver>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        tracing::debug!("Accepted connection from {}", peer);

        let acceptor = acceptor.clone();
        let resolver = resolver.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, acceptor, resolver);
            if let Err(e) = conn.run().await {
                tracing::warn!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}

pub fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
