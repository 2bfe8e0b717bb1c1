//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file named by
//! `SERVER_CONFIG`, then the `LISTEN_HOST` environment variable, then the
//! port given on the command line.

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_HEADER: &str = "lanternd/0.1";
pub const DEFAULT_TEMPLATE_SERVER_NAME: &str = "Lantern Static Server";

/// Command line: `lanternd [PORT]`.
#[derive(Debug, Parser)]
#[command(name = "lanternd")]
#[command(about = "Minimal single-host HTTP/1.1 file server")]
pub struct Cli {
    /// TCP port to listen on
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// What gets served and how the server names itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory request targets are resolved against.
    pub root: PathBuf,
    /// Value of the `Server` response header.
    pub server_header: String,
    /// Replacement for `<cs371server>` in served HTML.
    pub template_server_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            server_header: DEFAULT_SERVER_HEADER.to_string(),
            template_server_name: DEFAULT_TEMPLATE_SERVER_NAME.to_string(),
        }
    }
}

impl Config {
    /// Builds the effective configuration for a parsed command line.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("SERVER_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(host) = std::env::var("LISTEN_HOST") {
            cfg.server.host = host;
        }

        if let Some(port) = cli.port {
            cfg.server.port = port;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config file {}", path))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
