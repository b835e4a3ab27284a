//! Static file server for the built widget bundle.

use std::path::PathBuf;

use a11y_widget::app::infrastructure::logging::init_logging;
use a11y_widget::server::{self, DEFAULT_PORT, DEFAULT_ROOT, ServerConfig};
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve the accessibility widget bundle")]
struct Args {
    /// Port to listen on (all interfaces)
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Directory holding index.html and the built assets
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let config = ServerConfig {
        root: args.root,
        port: args.port,
    };
    server::serve(config)
        .await
        .with_context(|| format!("serve on port {}", args.port))
}
