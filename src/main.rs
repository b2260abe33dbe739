//! Campaign runner binary.
//!
//! Loads a TOML configuration, connects the beacon client and the chain
//! provider, and drives one lottery campaign end to end. Every step is
//! sequential; the run halts on the first failure.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon_runner::campaign;
use beacon_runner::config::loader::load_config;
use beacon_runner::{DrandBeacon, JsonRpcProvider};

#[derive(Parser)]
#[command(name = "beacon-runner")]
#[command(about = "Run a drand-resolved lottery campaign", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "runner.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon_runner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("beacon-runner v0.1.0 starting");

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    tracing::info!(
        beacon_url = %config.beacon.url,
        rpc_url = %config.chain.rpc_url,
        package = %config.campaign.package,
        "Configuration loaded"
    );

    let beacon = DrandBeacon::new(config.beacon.clone());
    let provider = JsonRpcProvider::new(config.chain.clone());

    let outcome = campaign::run_lottery(&provider, &beacon, &config.campaign).await?;

    tracing::info!(
        campaign = %outcome.campaign_id,
        round = outcome.target_round,
        digest = %outcome.winner_digest,
        "Winner derived"
    );
    Ok(())
}
