mod cli;

use anyhow::Context;
use fb_core::AppConfig;
use fb_host::bootstrap::tracing::init_tracing_subscriber;
use fb_host::{load_config, load_seed, run_bridge};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!("feedbridge exited with error: {:#}", err);
        eprintln!("feedbridge: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path.clone())?,
        None => AppConfig::with_defaults(),
    };

    init_tracing_subscriber(config.file_logging).context("Failed to initialize tracing")?;

    let seed = match &cli.seed {
        Some(path) => load_seed(path.clone())?,
        None => Vec::new(),
    };

    info!(
        config = ?cli.config,
        seed_records = seed.len(),
        "feedbridge starting"
    );

    run_bridge(config, seed).await
}
