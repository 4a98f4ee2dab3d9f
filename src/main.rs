//! Wage engine HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use wage_engine::api::{AppState, create_router};
use wage_engine::config::{ConfigLoader, PayrollConfig};

/// Wage Engine Server - daily pay and weekly payroll over HTTP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a payroll YAML file. If not provided, the built-in defaults are used.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Wage Engine Server");

    let config: PayrollConfig = match &args.config {
        Some(path) => {
            info!("Loading payroll configuration from: {}", path.display());
            ConfigLoader::load(path)?.into_config()
        }
        None => {
            info!("Using default payroll configuration");
            PayrollConfig::default()
        }
    };
    info!(
        daily_salary = %config.daily_salary,
        regular_work_hours = config.regular_work_hours,
        "Payroll configuration ready"
    );

    let app = create_router(AppState::new(config));

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
