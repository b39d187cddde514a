mod server;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use triage_core::{ApiClient, DashboardConfig};

#[derive(Parser, Debug)]
#[command(
    name = "triage-dashboard",
    version,
    about = "Alert Triage Dashboard — server-rendered view over the triage backend"
)]
struct Cli {
    /// Listen address for the dashboard page
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Backend API base URL (overrides TRIAGE_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::from_env();
    config.bind = cli.bind;
    config.log_level = cli.log_level;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    let level = match config.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Alert Triage Dashboard v{}", env!("CARGO_PKG_VERSION"));
    info!(api_url = %config.api_url, "Backend API");

    let client = Arc::new(ApiClient::new(&config.api_url)?);

    info!(addr = %config.bind, "Dashboard available at http://{}", config.bind);
    server::serve(client, &config.bind).await
}
