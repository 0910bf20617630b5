//! Harness configuration.
//!
//! The original constants (tier names, status codes, throttling windows)
//! live in one immutable value handed explicitly to the sequencer instead
//! of static state.

use std::time::Duration;

/// Immutable configuration for a sequencer instance.
///
/// # Default Values
///
/// - `ok_status`: 200
/// - `tier_unlimited` / `tier_gold` / `tier_silver`: "Unlimited" / "Gold" / "Silver"
/// - `throttling_unit_time`: 60 seconds
/// - `throttling_additional_wait`: 5 seconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// HTTP status code treated as success for every lifecycle call
    pub ok_status: u16,
    /// Name of the unthrottled subscription tier
    pub tier_unlimited: String,
    /// Name of the gold subscription tier
    pub tier_gold: String,
    /// Name of the silver subscription tier
    pub tier_silver: String,
    /// Throttling window of the platform's rate limiter
    pub throttling_unit_time: Duration,
    /// Extra wait beyond the throttling window before re-invoking
    pub throttling_additional_wait: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            ok_status: 200,
            tier_unlimited: "Unlimited".to_string(),
            tier_gold: "Gold".to_string(),
            tier_silver: "Silver".to_string(),
            throttling_unit_time: Duration::from_secs(60),
            throttling_additional_wait: Duration::from_secs(5),
        }
    }
}
