//! iconbatch server entry point.
//!
//! Serves icon lookups either as JSON over HTTP or as MCP tools on stdio,
//! depending on `ICONBATCH_TRANSPORT`. Logging goes to stderr to avoid
//! interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use iconbatch_client::RemoteIconFinder;
use iconbatch_core::config::Transport;
use iconbatch_core::{AppConfig, BatchEngine, CacheDb};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod http;
mod tools;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    tracing::info!(
        transport = ?config.transport,
        db_path = %config.db_path.display(),
        finder_url = %config.finder_url,
        "starting iconbatch"
    );

    let cache = CacheDb::open(&config.db_path).await?;
    let finder = RemoteIconFinder::from_config(&config)?;
    let engine = BatchEngine::new(cache, Arc::new(finder));

    match config.transport {
        Transport::Http => {
            let addr = config.listen_socket_addr()?;
            http::serve(addr, http::router(engine)).await?;
        }
        Transport::Stdio => {
            let server = serve_server(handler::IconServer::new(engine), stdio()).await?;
            server.waiting().await?;
        }
    }

    tracing::info!("iconbatch stopped");

    Ok(())
}
