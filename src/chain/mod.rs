//! Chain node integration subsystem.
//!
//! # Data Flow
//! ```text
//! ContractCall (package, module, function, args, gas budget)
//!     → provider.rs (JSON-RPC submit, timeout-wrapped)
//!     → types.rs (TransactionCertificate: digest + execution status)
//!     → events.rs (fetch emitted events, extract a named field)
//! ```
//!
//! # Constraints
//! - A certificate with failure status halts the calling flow; nothing
//!   downstream runs on a failed predecessor
//! - Event queries are idempotent for finalized transactions
//! - No retries and no caching; each call performs exactly one fetch

pub mod events;
pub mod provider;
pub mod types;

pub use events::extract_field;
pub use provider::{ChainProvider, JsonRpcProvider};
pub use types::{
    ChainConfig, ChainError, ContractCall, EventPayload, ExecutionStatus, TransactionCertificate,
    TransactionEvent,
};
