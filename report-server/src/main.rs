use clap::Parser;
use tracing::{info, warn};

use error_common::{log_error, RelayError, Result};
use logger_redacted::{init_tracing, LoggerConfig};
use report_server::{create_app, ReportServer, Settings};

/// Error Relay HTTP Server
#[derive(Parser, Debug)]
#[command(name = "report-server")]
#[command(about = "Receives error reports and notifies administrators by email and chat")]
struct Args {
    /// Server bind address (overrides the settings file)
    #[arg(long, env = "ERROR_RELAY_HOST")]
    host: Option<String>,

    /// Server port (overrides the settings file)
    #[arg(short, long, env = "ERROR_RELAY_PORT")]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short, long, default_value = "report-server.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let mut logger_config = LoggerConfig::from_env();
    if args.verbose {
        logger_config.log_level = "debug".to_string();
    }
    init_tracing(&logger_config).map_err(|e| RelayError::ConfigError(e.to_string()))?;

    if !dotenv_loaded {
        warn!("No .env file found, using process environment only");
    }

    let mut settings = Settings::load(Some(args.config.as_str()))
        .map_err(|e| RelayError::ConfigError(format!("Failed to load {}: {}", args.config, e)))?;
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        deployment = %settings.deployment_name,
        "Starting Error Relay server"
    );

    let server = ReportServer::from_settings(&settings).map_err(|e| {
        log_error("wiring notification channels", &e);
        e
    })?;
    let app = create_app(server);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RelayError::NetworkError(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Error Relay server running on http://{}", addr);
    info!("Report intake available at: http://{}/api/v1/report_error", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| RelayError::ServerError(format!("HTTP server error: {}", e)))?;

    Ok(())
}
