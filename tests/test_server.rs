//! End-to-end tests over a real TLS connection: self-signed certificate,
//! acceptor loop on an ephemeral port, one request per connection.

use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;

use cyllene::resolver::Resolver;
use cyllene::server::{listener, tls};
use rcgen::{CertifiedKey, generate_simple_self_signed};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tokio_rustls::rustls::pki_types::{CertificateDer, ServerName};
use tokio_rustls::rustls::{ClientConfig, RootCertStore};

struct TestServer {
    addr: SocketAddr,
    cert_der: CertificateDer<'static>,
    // Held so the website root outlives the server task.
    _root: TempDir,
    _fallback: TempDir,
}

async fn start_server() -> TestServer {
    let root = TempDir::new().unwrap();
    let fallback = TempDir::new().unwrap();

    fs::write(root.path().join("index.html"), "<h1>welcome</h1>").unwrap();
    fs::write(root.path().join("403.html"), "<h1>forbidden page</h1>").unwrap();
    fs::write(root.path().join("404.html"), "<h1>not found page</h1>").unwrap();
    fs::write(root.path().join("405.html"), "<h1>method page</h1>").unwrap();

    let CertifiedKey { cert, signing_key } =
        generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    let cert_path = root.path().join("cert.pem");
    let key_path = root.path().join("key.pem");
    fs::write(&cert_path, cert.pem()).unwrap();
    fs::write(&key_path, signing_key.serialize_pem()).unwrap();

    let resolver = Arc::new(Resolver::new(root.path(), fallback.path()));
    resolver.verify().unwrap();

    let acceptor = tls::load_acceptor(&cert_path, &key_path).unwrap();
    let tcp = listener::bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = tcp.local_addr().unwrap();

    tokio::spawn(listener::serve(tcp, acceptor, resolver));

    TestServer {
        addr,
        cert_der: cert.der().clone(),
        _root: root,
        _fallback: fallback,
    }
}

async fn send_request(server: &TestServer, request: &[u8]) -> Vec<u8> {
    let mut roots = RootCertStore::empty();
    roots.add(server.cert_der.clone()).unwrap();
    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();
    let connector = TlsConnector::from(Arc::new(config));

    let stream = TcpStream::connect(server.addr).await.unwrap();
    let server_name = ServerName::try_from("localhost".to_string()).unwrap();
    let mut tls = connector.connect(server_name, stream).await.unwrap();

    tls.write_all(request).await.unwrap();

    let mut response = Vec::new();
    tls.read_to_end(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_get_existing_file_over_tls() {
    let server = start_server().await;
    let response = send_request(&server, b"GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let text = String::from_utf8_lossy(&response);

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"), "got: {text}");
    assert!(text.contains("Server: Cyllene\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n\r\n"));
    assert!(text.ends_with("<h1>welcome</h1>"));
}

#[tokio::test]
async fn test_traversal_gets_403_page() {
    let server = start_server().await;
    let response = send_request(&server, b"GET /../../etc/passwd HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8_lossy(&response);

    assert!(text.starts_with("HTTP/1.1 403 Forbidden\r\n"), "got: {text}");
    assert!(text.ends_with("<h1>forbidden page</h1>"));
}

#[tokio::test]
async fn test_unsupported_method_gets_405_page() {
    let server = start_server().await;
    let response = send_request(&server, b"DELETE /index.html HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8_lossy(&response);

    assert!(
        text.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"),
        "got: {text}"
    );
    assert!(text.ends_with("<h1>method page</h1>"));
}

#[tokio::test]
async fn test_missing_file_gets_404_page() {
    let server = start_server().await;
    let response = send_request(&server, b"GET /missing.html HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8_lossy(&response);

    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"), "got: {text}");
    assert!(text.ends_with("<h1>not found page</h1>"));
}

#[tokio::test]
async fn test_failed_handshake_does_not_stop_the_server() {
    let server = start_server().await;

    // A plaintext client fails the handshake; that connection dies alone.
    {
        let mut plain = TcpStream::connect(server.addr).await.unwrap();
        plain.write_all(b"GET / HTTP/1.1\r\n\r\n").await.unwrap();
        let mut sink = Vec::new();
        // The server drops the socket; whatever the read returns, the
        // point is that it terminates.
        let _ = plain.read_to_end(&mut sink).await;
    }

    // The listener must still serve a proper TLS client afterwards.
    let response = send_request(&server, b"GET /index.html HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let text = String::from_utf8_lossy(&response);
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"), "got: {text}");
}
