//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::beacon::schedule::RoundForecast;

/// Root configuration for the runner.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RunnerConfig {
    /// Randomness beacon endpoint settings.
    pub beacon: BeaconConfig,

    /// Chain node endpoint settings.
    pub chain: ChainConfig,

    /// Lottery campaign parameters.
    pub campaign: CampaignConfig,
}

/// Beacon endpoint configuration. Constructed once, never mutated.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BeaconConfig {
    /// Base URL of the beacon HTTP API, with trailing slash.
    pub url: String,

    /// Hash identifying which beacon chain to query.
    pub chain_hash: String,

    /// Genesis timestamp of the beacon chain (seconds since epoch).
    pub genesis_secs: u64,

    /// Seconds per beacon round.
    pub period_secs: u64,

    /// Bounded wait per HTTP request.
    pub request_timeout_secs: u64,

    /// How future rounds are forecast from a duration.
    pub forecast: RoundForecast,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            // League of Entropy mainnet
            url: "https://drand.cloudflare.com/".to_string(),
            chain_hash: "8990e7a9aaed2ffed73dbd7092123d6f289930540d7651336225dc172e51b2ce"
                .to_string(),
            genesis_secs: 1_595_431_050,
            period_secs: 30,
            request_timeout_secs: 10,
            forecast: RoundForecast::default(),
        }
    }
}

/// Chain node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint of the chain node.
    pub rpc_url: String,

    /// Bounded wait per RPC request.
    pub request_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:9000".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Parameters of one lottery campaign run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CampaignConfig {
    /// Contract package identifier.
    pub package: String,

    /// Module holding the lottery entry points.
    pub module: String,

    /// Fully qualified type of the prize object.
    pub prize_type: String,

    /// Object id of the prize.
    pub prize: String,

    /// Coin object the buyer pays with.
    pub coin: String,

    /// Ticket cap for the campaign.
    pub max_tickets: u64,

    /// Price per ticket.
    pub ticket_price: u64,

    /// Tickets the buyer purchases.
    pub tickets_to_buy: u64,

    /// Minutes until the campaign resolves; 0 schedules the nearest round.
    pub duration_minutes: u64,

    /// Gas budget per submitted call.
    pub gas_budget: u64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            module: "lottery".to_string(),
            prize_type: String::new(),
            prize: String::new(),
            coin: String::new(),
            max_tickets: 100,
            ticket_price: 1,
            tickets_to_buy: 50,
            duration_minutes: 0,
            gas_budget: 10_000,
        }
    }
}
