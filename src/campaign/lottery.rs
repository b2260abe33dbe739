//! Drand-resolved lottery campaign flow.
//!
//! # Sequence
//! ```text
//! forecast target round
//!     → create_campaign (target round as resolution point)
//!     → extract campaign_id from the emitted event
//!     → buy_without_ticket
//!     → close_campaign  (signatures of target round - 2)
//!     → get_winner      (signatures of target round)
//! ```
//!
//! The contract verifies the beacon signature chain on-chain, so the two
//! closing calls pass `signature` and `previous_signature` hex-decoded to
//! raw bytes.

use serde_json::{json, Value};

use crate::beacon::client::DrandBeacon;
use crate::beacon::schedule::TimeUnit;
use crate::beacon::types::Randomness;
use crate::campaign::CampaignError;
use crate::chain::events;
use crate::chain::provider::ChainProvider;
use crate::chain::types::ContractCall;
use crate::config::schema::CampaignConfig;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct LotteryOutcome {
    /// Campaign object id extracted from the creation event.
    pub campaign_id: Value,

    /// Beacon round the campaign resolved against.
    pub target_round: u64,

    /// Digest of the winner-derivation transaction.
    pub winner_digest: String,
}

/// Run one lottery campaign end to end.
pub async fn run_lottery<P: ChainProvider>(
    provider: &P,
    beacon: &DrandBeacon,
    config: &CampaignConfig,
) -> Result<LotteryOutcome, CampaignError> {
    let target_round = beacon.future_round(TimeUnit::Minute, config.duration_minutes as f64);
    tracing::info!(
        round = target_round,
        minutes = config.duration_minutes,
        "Scheduled campaign resolution round"
    );

    let create = provider
        .execute_call(&call(
            config,
            "create_campaign",
            vec![
                json!(config.max_tickets),
                json!(config.ticket_price),
                json!(target_round),
                json!(config.prize),
            ],
        ))
        .await?;
    create.ensure_success("create_campaign")?;

    let campaign_id = events::extract_field(provider, &create.digest, "campaign_id").await?;
    tracing::info!(campaign = %campaign_id, "Campaign created");

    let buy = provider
        .execute_call(&call(
            config,
            "buy_without_ticket",
            vec![
                campaign_id.clone(),
                json!(config.tickets_to_buy),
                json!(config.coin),
            ],
        ))
        .await?;
    buy.ensure_success("buy_without_ticket")?;

    // Closing takes the signatures of the two rounds preceding resolution
    let closing = beacon.get_by_round(target_round.saturating_sub(2)).await?;
    let close = provider
        .execute_call(&call(
            config,
            "close_campaign",
            signed_args(&campaign_id, &closing)?,
        ))
        .await?;
    close.ensure_success("close_campaign")?;

    let winning = beacon.get_by_round(target_round).await?;
    let winner = provider
        .execute_call(&call(
            config,
            "get_winner",
            signed_args(&campaign_id, &winning)?,
        ))
        .await?;
    winner.ensure_success("get_winner")?;

    Ok(LotteryOutcome {
        campaign_id,
        target_round,
        winner_digest: winner.digest,
    })
}

fn call(config: &CampaignConfig, function: &str, args: Vec<Value>) -> ContractCall {
    ContractCall {
        package: config.package.clone(),
        module: config.module.clone(),
        function: function.to_string(),
        type_args: vec![config.prize_type.clone()],
        args,
        gas_budget: config.gas_budget,
    }
}

fn signed_args(campaign_id: &Value, round: &Randomness) -> Result<Vec<Value>, CampaignError> {
    Ok(vec![
        campaign_id.clone(),
        json!(hex::decode(&round.signature)?),
        json!(hex::decode(&round.previous_signature)?),
    ])
}
