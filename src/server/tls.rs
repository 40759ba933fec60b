//! TLS server materials.
//!
//! The certificate, private key and protocol settings are loaded once at
//! startup into a `rustls::ServerConfig` that every connection handler
//! shares read-only. Failure to load either file is startup-fatal.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::rustls::ServerConfig;

/// Build the process-wide TLS acceptor from PEM-encoded certificate and
/// private key files.
pub fn load_acceptor(cert_path: &Path, key_path: &Path) -> Result<TlsAcceptor> {
    let config = build_server_config(cert_path, key_path)?;
    Ok(TlsAcceptor::from(config))
}

fn build_server_config(cert_path: &Path, key_path: &Path) -> Result<Arc<ServerConfig>> {
    let cert_pem = std::fs::read(cert_path)
        .with_context(|| format!("failed to read certificate {}", cert_path.display()))?;
    let key_pem = std::fs::read(key_path)
        .with_context(|| format!("failed to read private key {}", key_path.display()))?;

    let certs = rustls_pemfile::certs(&mut std::io::BufReader::new(cert_pem.as_slice()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("failed to parse TLS certificate chain")?;

    let key = rustls_pemfile::private_key(&mut std::io::BufReader::new(key_pem.as_slice()))
        .context("failed to read TLS private key")?
        .context("no private key found in PEM data")?;

    let config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .context("failed to build rustls ServerConfig")?;

    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejects_garbage_pem() {
        let mut cert = tempfile::NamedTempFile::new().unwrap();
        let mut key = tempfile::NamedTempFile::new().unwrap();
        cert.write_all(b"not a pem").unwrap();
        key.write_all(b"also not a pem").unwrap();

        let result = build_server_config(cert.path(), key.path());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_files() {
        let result = load_acceptor(Path::new("/nonexistent/cert"), Path::new("/nonexistent/key"));
        assert!(result.is_err());
    }
}
