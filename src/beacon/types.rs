//! Beacon wire types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export BeaconConfig from the config module to avoid duplication
pub use crate::config::schema::BeaconConfig;

/// One published beacon round. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Randomness {
    /// Monotonically increasing beacon epoch index.
    pub round: u64,

    /// Hex-encoded digest of the round's output.
    pub randomness: String,

    /// Hex-encoded signature over the round.
    pub signature: String,

    /// Hex-encoded signature of the prior round; consuming contracts use
    /// it to verify the hash-chain link.
    pub previous_signature: String,
}

/// Errors that can occur while talking to the beacon.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// Transport failure or unexpected HTTP status from the beacon.
    #[error("beacon request failed: {0}")]
    Network(String),

    /// Request exceeded the configured bounded wait.
    #[error("beacon request timed out after {0} seconds")]
    Timeout(u64),

    /// Response body was not a valid `Randomness` document.
    #[error("beacon response malformed: {0}")]
    Decode(String),

    /// The beacon has not published this round yet. A caller error, not a
    /// transient fault; must not be blindly retried.
    #[error("beacon has not published round {round} yet")]
    RoundNotFound { round: u64 },
}

/// Result type for beacon operations.
pub type BeaconResult<T> = Result<T, BeaconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randomness_fixture_round_trip() {
        let fixture = r#"{"round":100,"randomness":"ab12","signature":"cd34","previous_signature":"ef56"}"#;
        let decoded: Randomness = serde_json::from_str(fixture).unwrap();
        assert_eq!(decoded.round, 100);
        assert_eq!(decoded.randomness, "ab12");
        assert_eq!(decoded.signature, "cd34");
        assert_eq!(decoded.previous_signature, "ef56");

        let encoded = serde_json::to_string(&decoded).unwrap();
        let again: Randomness = serde_json::from_str(&encoded).unwrap();
        assert_eq!(again, decoded);
    }

    #[test]
    fn test_default_config() {
        let config = BeaconConfig::default();
        assert_eq!(config.genesis_secs, 1_595_431_050);
        assert_eq!(config.period_secs, 30);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(
            config.forecast,
            crate::beacon::schedule::RoundForecast::PeriodAware
        );
    }

    #[test]
    fn test_error_display() {
        let err = BeaconError::Timeout(10);
        assert_eq!(err.to_string(), "beacon request timed out after 10 seconds");

        let err = BeaconError::RoundNotFound { round: 4242 };
        assert!(err.to_string().contains("4242"));
    }
}
