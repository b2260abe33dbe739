//! Randomness beacon subsystem.
//!
//! # Data Flow
//! ```text
//! BeaconConfig (url, chain hash, genesis, period)
//!     → client.rs (HTTP fetch with timeouts)
//!     → types.rs (Randomness value object)
//!     → schedule.rs (duration → future round forecast)
//! ```
//!
//! # Constraints
//! - The round → Randomness mapping is fixed per chain hash; repeated
//!   fetches for the same round return identical values
//! - A round the beacon has not published yet is a caller error, not a
//!   transient fault
//! - All requests have a bounded wait; a hung beacon never blocks a flow

pub mod client;
pub mod schedule;
pub mod types;

pub use client::DrandBeacon;
pub use schedule::{RoundForecast, TimeUnit};
pub use types::{BeaconConfig, BeaconError, Randomness};
