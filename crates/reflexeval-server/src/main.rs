use anyhow::{Context, Result};
use clap::Parser;
use reflexeval_infrastructure::{ConfigService, ReflexPaths};
use reflexeval_server::{AppState, build_router, logging};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "reflexeval")]
#[command(about = "ReflexEval AP - reflection session activity provider", long_about = None)]
struct Cli {
    /// Path to config.toml (falls back to $REFLEXEVAL_CONFIG, then the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind host, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overriding the config file and $PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_handle = logging::init_tracing()?;

    let config_path = ReflexPaths::config_file(cli.config)?;
    let config_service = ConfigService::new(config_path);
    let mut config = config_service.get_config().with_context(|| {
        format!(
            "Failed to load configuration from {:?}",
            config_service.path()
        )
    })?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    log_handle
        .apply_config_level(&config.log_level)
        .with_context(|| format!("Invalid log_level '{}'", config.log_level))?;
    info!("Using configuration: {:?}", config);

    let app_state = AppState::from_config(&config).context("Failed to build plans")?;
    let app = build_router(app_state);

    let addr_str = config.server.bind_address();
    let bind_addr: SocketAddr = addr_str
        .parse()
        .with_context(|| format!("Invalid bind address: {}", addr_str))?;

    info!(address = %bind_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}
