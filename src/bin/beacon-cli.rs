use clap::{Parser, Subcommand};

use beacon_runner::beacon::schedule::{RoundForecast, TimeUnit};
use beacon_runner::config::BeaconConfig;
use beacon_runner::DrandBeacon;

#[derive(Parser)]
#[command(name = "beacon-cli")]
#[command(about = "Query a drand randomness beacon", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "https://drand.cloudflare.com/")]
    url: String,

    #[arg(
        long,
        default_value = "8990e7a9aaed2ffed73dbd7092123d6f289930540d7651336225dc172e51b2ce"
    )]
    chain_hash: String,

    #[arg(long, default_value_t = 1_595_431_050)]
    genesis: u64,

    #[arg(long, default_value_t = 30)]
    period: u64,

    /// Use the fixed 2-rounds-per-minute forecast of earlier deployments
    #[arg(long)]
    legacy_forecast: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the most recently published round
    Latest,
    /// Fetch a specific round
    Round { round: u64 },
    /// Forecast the round reached after a duration from now
    Forecast {
        /// Time unit: sec, minute, hour, day, week
        unit: TimeUnit,
        amount: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = BeaconConfig {
        url: cli.url,
        chain_hash: cli.chain_hash,
        genesis_secs: cli.genesis,
        period_secs: cli.period,
        forecast: if cli.legacy_forecast {
            RoundForecast::Legacy
        } else {
            RoundForecast::PeriodAware
        },
        ..BeaconConfig::default()
    };
    let beacon = DrandBeacon::new(config);

    match cli.command {
        Commands::Latest => {
            let randomness = beacon.get_latest().await?;
            println!("{}", serde_json::to_string_pretty(&randomness)?);
        }
        Commands::Round { round } => {
            let randomness = beacon.get_by_round(round).await?;
            println!("{}", serde_json::to_string_pretty(&randomness)?);
        }
        Commands::Forecast { unit, amount } => {
            println!("{}", beacon.future_round(unit, amount));
        }
    }

    Ok(())
}
