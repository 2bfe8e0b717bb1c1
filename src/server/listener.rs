use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, SiteConfig};
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    serve(listener, Arc::new(cfg.site.clone())).await
}

pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {}", addr))?;
    info!("Listening on {}", addr);
    Ok(listener)
}

/// Accepts connections until `accept` fails, spawning one task per client.
///
/// Tasks already running are unaffected when the loop ends.
pub async fn serve(listener: TcpListener, site: Arc<SiteConfig>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener
            .accept()
            .await
            .context("no longer accepting connections")?;
        info!("Accepted connection from {}", peer);

        let site = site.clone();
        tokio::spawn(async move {
            if let Err(e) = Connection::new(socket, site).run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
            tracing::debug!(%peer, "Connection closed");
        });
    }
}
