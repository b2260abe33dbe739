//! Drand beacon HTTP client with timeout and error handling.
//!
//! # Responsibilities
//! - Fetch published rounds by number or "latest"
//! - Classify transport, decode, and not-yet-published failures
//! - Forecast future rounds from a time offset

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tokio::time::timeout;

use crate::beacon::schedule::{self, TimeUnit};
use crate::beacon::types::{BeaconConfig, BeaconError, BeaconResult, Randomness};

/// Client for one drand beacon chain. Holds no mutable state across calls.
#[derive(Clone)]
pub struct DrandBeacon {
    http: reqwest::Client,
    config: BeaconConfig,
}

impl DrandBeacon {
    /// Create a client for the configured beacon chain.
    pub fn new(config: BeaconConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the most recently published round.
    pub async fn get_latest(&self) -> BeaconResult<Randomness> {
        self.fetch(None).await
    }

    /// Fetch a specific round by its numeric identifier.
    pub async fn get_by_round(&self, round: u64) -> BeaconResult<Randomness> {
        self.fetch(Some(round)).await
    }

    async fn fetch(&self, round: Option<u64>) -> BeaconResult<Randomness> {
        let request_round = match round {
            Some(r) => r.to_string(),
            None => "latest".to_string(),
        };
        let url = format!(
            "{}{}/public/{}",
            self.config.url, self.config.chain_hash, request_round
        );

        let send = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send();
        let response = timeout(self.request_timeout(), send)
            .await
            .map_err(|_| BeaconError::Timeout(self.config.request_timeout_secs))?
            .map_err(|e| BeaconError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(r) = round {
                return Err(BeaconError::RoundNotFound { round: r });
            }
        }
        if !status.is_success() {
            return Err(BeaconError::Network(format!(
                "beacon returned status {} for {}",
                status, url
            )));
        }

        let body = timeout(self.request_timeout(), response.text())
            .await
            .map_err(|_| BeaconError::Timeout(self.config.request_timeout_secs))?
            .map_err(|e| BeaconError::Network(e.to_string()))?;

        let randomness: Randomness =
            serde_json::from_str(&body).map_err(|e| BeaconError::Decode(e.to_string()))?;

        tracing::debug!(round = randomness.round, "Fetched beacon round");
        Ok(randomness)
    }

    /// Round expected to be reached `amount` of `unit` from now.
    pub fn future_round(&self, unit: TimeUnit, amount: f64) -> u64 {
        let now_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        schedule::future_round_at(now_secs, &self.config, unit, amount)
    }

    /// Get the configuration.
    pub fn config(&self) -> &BeaconConfig {
        &self.config
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_secs)
    }
}

impl std::fmt::Debug for DrandBeacon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrandBeacon")
            .field("url", &self.config.url)
            .field("chain_hash", &self.config.chain_hash)
            .field("period_secs", &self.config.period_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beacon::schedule::RoundForecast;

    #[test]
    fn test_future_round_not_behind_clock() {
        let config = BeaconConfig {
            forecast: RoundForecast::PeriodAware,
            ..BeaconConfig::default()
        };
        let beacon = DrandBeacon::new(config.clone());

        let now_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let current = (now_secs - config.genesis_secs) / config.period_secs + 1;
        assert!(beacon.future_round(TimeUnit::Minute, 0.0) >= current);
    }
}
