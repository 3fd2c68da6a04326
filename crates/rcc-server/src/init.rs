//! Server Initialization
//!
//! Loads configuration, installs logging, wires the application context and
//! launches the HTTP transport.

use crate::transport::http::serve;
use rcc_infrastructure::config::{AppConfig, ConfigLoader};
use rcc_infrastructure::di::init_app;
use rcc_infrastructure::logging::init_logging;
use std::path::Path;
use tracing::info;

/// Run the server until shutdown
///
/// `config_path` overrides the default configuration file search.
pub async fn run_server(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        cache_enabled = config.cache.enabled,
        cache_provider = %config.cache.provider,
        "Starting recruitment crew cache server"
    );

    let server = config.server.clone();
    let context = init_app(config)?;

    serve(context, &server).await?;
    info!("Server stopped");
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> rcc_domain::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
