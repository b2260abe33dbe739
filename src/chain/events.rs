//! Event field extraction for finalized transactions.

use serde_json::Value;

use crate::chain::provider::ChainProvider;
use crate::chain::types::{ChainError, ChainResult, EventPayload, TransactionEvent};

/// Fetch the events of `digest` and extract `field` from the first emitted
/// event.
///
/// Exactly one fetch, no retries, no caching. Transactions emitting several
/// recognizable events only have their first inspected; callers needing a
/// different one must filter by type before calling.
pub async fn extract_field<P: ChainProvider>(
    provider: &P,
    digest: &str,
    field: &str,
) -> ChainResult<Value> {
    let events = provider.events_for(digest).await?;
    first_emitted_field(&events, digest, field)
}

/// Extract `field` from the first event carrying the recognized
/// emitted-value shape. Unrecognized shapes are skipped, never an error.
pub fn first_emitted_field(
    events: &[TransactionEvent],
    digest: &str,
    field: &str,
) -> ChainResult<Value> {
    let emitted = events
        .iter()
        .find_map(|event| match &event.event {
            EventPayload::Emitted(ev) => Some(ev),
            EventPayload::Unrecognized => None,
        })
        .ok_or_else(|| ChainError::NoMatchingEvent {
            digest: digest.to_string(),
        })?;

    emitted
        .fields
        .get(field)
        .cloned()
        .ok_or_else(|| ChainError::FieldNotFound {
            field: field.to_string(),
        })
}
