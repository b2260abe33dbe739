//! Drand-backed round scheduling and contract-call orchestration.

pub mod beacon;
pub mod campaign;
pub mod chain;
pub mod config;

pub use beacon::client::DrandBeacon;
pub use chain::provider::{ChainProvider, JsonRpcProvider};
pub use config::RunnerConfig;
