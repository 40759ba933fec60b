use std::sync::Arc;

use cyllene::config::Config;
use cyllene::resolver::Resolver;
use cyllene::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // Configuration problems (missing website root or error pages) are
    // fatal here, before the first connection is accepted.
    let resolver = Arc::new(Resolver::new(
        cfg.website_root.clone(),
        cfg.fallback_root.clone(),
    ));
    resolver.verify()?;

    let acceptor = server::tls::load_acceptor(&cfg.cert_path, &cfg.key_path)?;

    tokio::select! {
        res = server::listener::run(cfg.listen_addr(), acceptor, resolver) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
