//! Chain wire types and error definitions.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// Re-export ChainConfig from the config module to avoid duplication
pub use crate::config::schema::ChainConfig;

/// One contract call to submit: package, entry point, arguments, gas budget.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContractCall {
    /// Contract package identifier.
    pub package: String,

    /// Module within the package.
    pub module: String,

    /// Entry function name.
    pub function: String,

    /// Type arguments, fully qualified.
    #[serde(default)]
    pub type_args: Vec<String>,

    /// Positional arguments as JSON values.
    #[serde(default)]
    pub args: Vec<Value>,

    /// Maximum computation the submitter authorizes.
    pub gas_budget: u64,
}

/// Outcome of an executed transaction as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failure { error: String },
}

/// Certificate returned for a submitted call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionCertificate {
    /// Digest identifying the transaction.
    pub digest: String,

    #[serde(flatten)]
    pub status: ExecutionStatus,
}

impl TransactionCertificate {
    /// Halt the calling flow if the transaction failed on-chain.
    ///
    /// `label` names the step for the log line and the error message.
    pub fn ensure_success(&self, label: &str) -> ChainResult<()> {
        match &self.status {
            ExecutionStatus::Success => {
                tracing::info!(tx = label, digest = %self.digest, "Transaction succeeded");
                Ok(())
            }
            ExecutionStatus::Failure { error } => Err(ChainError::TransactionFailed {
                label: label.to_string(),
                message: error.clone(),
            }),
        }
    }
}

/// Decoded payload of one emitted event.
///
/// Shapes other than the recognized emitted-value one (transfers, gas
/// charges, system events) map to `Unrecognized` and are skipped by the
/// extractor, never an error.
#[derive(Debug, Clone)]
pub enum EventPayload {
    Emitted(EmittedEvent),
    Unrecognized,
}

/// The recognized emitted-value event shape: a type tag plus a field map.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmittedEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,

    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for EventPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut shapes: Map<String, Value> = Map::deserialize(deserializer)?;
        match shapes.remove("moveEvent") {
            Some(body) => serde_json::from_value(body)
                .map(EventPayload::Emitted)
                .map_err(de::Error::custom),
            None => Ok(EventPayload::Unrecognized),
        }
    }
}

/// One event as returned by the node's events query, in emission order.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEvent {
    pub event: EventPayload,
}

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Transport failure or unexpected HTTP status from the node.
    #[error("chain RPC request failed: {0}")]
    Network(String),

    /// Request exceeded the configured bounded wait.
    #[error("chain RPC request timed out after {0} seconds")]
    Timeout(u64),

    /// Response body did not decode to the expected shape.
    #[error("chain RPC response malformed: {0}")]
    Decode(String),

    /// The node answered with a JSON-RPC error object.
    #[error("chain RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The transaction executed but reverted or failed on-chain.
    #[error("transaction '{label}' failed on-chain: {message}")]
    TransactionFailed { label: String, message: String },

    /// No emitted event of the recognized shape was found.
    #[error("no emitted event found for transaction {digest}")]
    NoMatchingEvent { digest: String },

    /// The matched event's field map lacks the requested key.
    #[error("event is missing field '{field}'")]
    FieldNotFound { field: String },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
