//! Campaign orchestration flows.
//!
//! Flows are strictly sequential: every beacon fetch and chain call is
//! awaited before the next is issued, and a failure anywhere halts the run.
//! A later call that depends on an earlier one's output never runs after a
//! failed predecessor.

pub mod lottery;

use thiserror::Error;

use crate::beacon::types::BeaconError;
use crate::chain::types::ChainError;

/// Errors surfaced by a campaign run.
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error(transparent)]
    Beacon(#[from] BeaconError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    /// The beacon handed back a signature that is not valid hex.
    #[error("beacon signature is not valid hex: {0}")]
    SignatureHex(#[from] hex::FromHexError),
}

pub use lottery::{run_lottery, LotteryOutcome};
