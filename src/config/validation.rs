//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (periods > 0, timeouts > 0)
//! - Check endpoint URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RunnerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::RunnerConfig;

/// One semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,

    /// What is wrong with it.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RunnerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Url::parse(&config.beacon.url).is_err() {
        push(&mut errors, "beacon.url", "not a valid URL");
    } else if !config.beacon.url.ends_with('/') {
        // The chain hash is appended directly to the base URL
        push(&mut errors, "beacon.url", "must end with a trailing slash");
    }
    if config.beacon.chain_hash.is_empty() {
        push(&mut errors, "beacon.chain_hash", "must not be empty");
    }
    if config.beacon.period_secs == 0 {
        push(&mut errors, "beacon.period_secs", "must be greater than zero");
    }
    if config.beacon.request_timeout_secs == 0 {
        push(
            &mut errors,
            "beacon.request_timeout_secs",
            "must be greater than zero",
        );
    }

    if Url::parse(&config.chain.rpc_url).is_err() {
        push(&mut errors, "chain.rpc_url", "not a valid URL");
    }
    if config.chain.request_timeout_secs == 0 {
        push(
            &mut errors,
            "chain.request_timeout_secs",
            "must be greater than zero",
        );
    }

    if config.campaign.max_tickets == 0 {
        push(&mut errors, "campaign.max_tickets", "must be greater than zero");
    }
    if config.campaign.gas_budget == 0 {
        push(&mut errors, "campaign.gas_budget", "must be greater than zero");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn push(errors: &mut Vec<ValidationError>, field: &str, message: &str) {
    errors.push(ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    });
}
