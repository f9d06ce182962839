//! Slicer demo server
//!
//! Serves a small person directory with partial JSON responses.

use clap::Parser;
use slicer::{SlicerConfig, create_app, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &SlicerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SlicerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        strict = config.strict,
        fields_param = %config.fields_param,
        "Starting slicer server"
    );

    let app = create_app(config.clone());
    serve(app, &config).await
}
