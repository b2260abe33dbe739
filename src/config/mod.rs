//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RunnerConfig (validated, immutable)
//!     → passed to constructors explicitly
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Components never read ambient process environment; endpoints and
//!   identifiers always arrive through an explicit config object

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BeaconConfig;
pub use schema::CampaignConfig;
pub use schema::ChainConfig;
pub use schema::RunnerConfig;
