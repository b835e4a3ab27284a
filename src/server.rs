//! Static delivery of the built widget bundle with single-page fallback.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ROOT: &str = "dist/public";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub root: PathBuf,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            port: DEFAULT_PORT,
        }
    }
}

/// Files under `root`; any path without a file answers with `index.html`.
pub fn router(root: &Path) -> Router {
    let index = ServeFile::new(root.join("index.html"));
    Router::new()
        .fallback_service(ServeDir::new(root).fallback(index))
        .layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:{port}` and serve until Ctrl+C.
pub async fn serve(config: ServerConfig) -> io::Result<()> {
    if !config.root.join("index.html").is_file() {
        warn!(root = %config.root.display(), "no index.html under static root");
    }
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on http://localhost:{}", config.port);

    axum::serve(listener, router(&config.root))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Serve on an already bound listener, without a shutdown signal.
pub async fn serve_on(listener: TcpListener, root: &Path) -> io::Result<()> {
    axum::serve(listener, router(root)).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => warn!(%err, "failed to listen for Ctrl+C"),
    }
}
