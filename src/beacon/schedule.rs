//! Round forecasting: translate a time offset into a beacon round number.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::beacon::types::BeaconConfig;

/// Time units accepted by the forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Sec,
    Minute,
    Hour,
    Day,
    Week,
}

impl TimeUnit {
    /// Seconds in one unit.
    pub fn secs(self) -> u64 {
        match self {
            TimeUnit::Sec => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => 86_400,
            TimeUnit::Week => 604_800,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sec" | "second" | "seconds" => Ok(TimeUnit::Sec),
            "minute" | "minutes" | "min" => Ok(TimeUnit::Minute),
            "hour" | "hours" => Ok(TimeUnit::Hour),
            "day" | "days" => Ok(TimeUnit::Day),
            "week" | "weeks" => Ok(TimeUnit::Week),
            other => Err(format!("unknown time unit '{}'", other)),
        }
    }
}

/// Convert `amount` of `from` into `to` units.
pub fn convert(from: TimeUnit, amount: f64, to: TimeUnit) -> f64 {
    from.secs() as f64 * amount / to.secs() as f64
}

/// How a duration is mapped onto future beacon rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundForecast {
    /// Derive rounds-per-minute from the configured period.
    #[default]
    PeriodAware,

    /// Fixed 2 rounds per minute, matching the behavior of earlier
    /// deployments that assumed a 30-second period. Kept so existing
    /// schedules stay reproducible.
    Legacy,
}

/// Round number expected to be reached `amount` of `unit` after `now_secs`.
///
/// The current round is `floor((now - genesis) / period) + 1`; the offset is
/// the duration in minutes scaled by the forecast's rounds-per-minute rate.
pub fn future_round_at(now_secs: u64, config: &BeaconConfig, unit: TimeUnit, amount: f64) -> u64 {
    let minutes = convert(unit, amount, TimeUnit::Minute);
    let current_round = now_secs.saturating_sub(config.genesis_secs) / config.period_secs + 1;

    let rounds_per_minute = match config.forecast {
        RoundForecast::PeriodAware => 60.0 / config.period_secs as f64,
        RoundForecast::Legacy => 2.0,
    };

    (current_round as f64 + minutes * rounds_per_minute).floor() as u64
}
