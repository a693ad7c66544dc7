//! REST API server for the SWIFT code registry.
//!
//! Opens the embedded store, populates it from the source file when empty,
//! and serves the `/v1/swift-codes` API until Ctrl+C.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use swift_codes_api::{router::Router, server::Server};
use swift_codes_core::{config::ServiceConfig, loader, Store, SwiftCodeService};
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the registry server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Embedded database file
    #[arg(long, default_value = "swift_codes.db")]
    db_path: PathBuf,

    /// Bucket holding the records
    #[arg(long, default_value = "swift_code")]
    bucket: String,

    /// Semicolon-delimited file used to populate an empty store
    #[arg(long, default_value = "swiftCodes.csv")]
    source: PathBuf,

    /// Do not populate the store at startup
    #[arg(long)]
    skip_populate: bool,
}

impl From<Args> for ServiceConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            db_path: args.db_path,
            bucket: args.bucket,
            source_file: args.source,
            populate_on_start: !args.skip_populate,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from(Args::parse());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Store::open(&config.db_path, &config.bucket).with_context(|| {
        format!("Failed to open database {}", config.db_path.display())
    })?;
    let store = Arc::new(store);

    if config.populate_on_start {
        match loader::populate_if_empty(&store, &config.source_file) {
            Ok(report) if report.already_populated => {}
            Ok(report) => tracing::info!(
                inserted = report.inserted,
                skipped = report.skipped,
                "Loaded SWIFT codes"
            ),
            Err(e) => tracing::error!(
                source = %config.source_file.display(),
                "Failed to populate database: {}",
                e
            ),
        }
    }

    let router = Router::new(SwiftCodeService::new(store));
    let addr: SocketAddr = config
        .socket_addr()
        .with_context(|| format!("Invalid bind host {}", config.host))?;
    let server = Server::new(addr, router);

    tracing::info!(
        host = %config.host,
        port = config.port,
        db = %config.db_path.display(),
        bucket = %config.bucket,
        "Starting SWIFT code registry"
    );

    tokio::select! {
        result = server.serve() => result.context("Server error")?,
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl_c")?;
            tracing::info!("Shutting down server");
        }
    }

    Ok(())
}
