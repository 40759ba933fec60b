//! Server configuration.
//!
//! Three layers, later ones winning: built-in defaults, an optional YAML
//! config file (`--config`), then command-line flags.

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::resolver::FALLBACK_SITE_DIR;

#[derive(Parser, Debug)]
#[command(name = "cyllene", about = "Minimal HTTPS static file server")]
struct Cli {
    /// Path to the TLS certificate file (PEM)
    #[arg(short = 'c', long = "cert")]
    cert_path: Option<PathBuf>,

    /// Path to the TLS private key file (PEM)
    #[arg(short = 'k', long = "key")]
    key_path: Option<PathBuf>,

    /// Port to listen on
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,

    /// Website root directory
    #[arg(short = 'r', long = "root")]
    website_root: Option<PathBuf>,

    /// Optional YAML configuration file
    #[arg(long = "config")]
    config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub port: u16,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub website_root: PathBuf,
    pub fallback_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            cert_path: PathBuf::from("cert.pem"),
            key_path: PathBuf::from("key.pem"),
            website_root: PathBuf::from("website"),
            fallback_root: PathBuf::from(FALLBACK_SITE_DIR),
        }
    }
}

impl Config {
    /// Loads configuration from CLI arguments and, if given, the YAML
    /// config file.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.port > 1024 && self.port < 49151,
            "Port must be between 1024 and 49151."
        );
        Ok(())
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(port) = cli.port {
            config.port = port;
        }
        if let Some(cert_path) = cli.cert_path {
            config.cert_path = cert_path;
        }
        if let Some(key_path) = cli.key_path {
            config.key_path = key_path;
        }
        if let Some(website_root) = cli.website_root {
            config.website_root = website_root;
        }

        config.validate()?;
        Ok(config)
    }
}
