//! Engine parameters
//!
//! One immutable configuration value carries everything the update formulas
//! need: the 17-entry FSRS weight table, the target recall probability, and
//! the constants of the interval curve. The defaults are the canonical FSRS
//! parameterization; callers may construct their own set for experimentation
//! and pass it to [`crate::scheduler::review_card`].

use serde::{Deserialize, Serialize};

/// Number of weights in the FSRS parameter table
pub const WEIGHT_COUNT: usize = 17;

/// Floor applied to stability after every update
pub const MIN_STABILITY: f64 = 0.1;

/// Difficulty bounds, enforced on every update
pub const MIN_DIFFICULTY: f64 = 1.0;
pub const MAX_DIFFICULTY: f64 = 10.0;

/// Canonical FSRS weight table.
///
/// w0..w3 are the initial stabilities for Again/Hard/Good/Easy; the rest drive
/// the difficulty and stability transitions (see `algorithm.rs`).
pub const DEFAULT_WEIGHTS: [f64; WEIGHT_COUNT] = [
    0.4, 0.6, 2.4, 5.8, 4.93, 0.94, 0.86, 0.01, 1.49, 0.14, 0.94, 2.18, 0.05, 0.34, 1.26, 0.29,
    2.61,
];

/// Configuration for the scheduling engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerParams {
    /// FSRS weight table
    pub w: [f64; WEIGHT_COUNT],
    /// Desired probability of recall at the moment a card comes due
    pub request_retention: f64,
    /// Exponent of the forgetting curve the interval is solved from.
    /// The curve is R(t) = (1 + t/(9S))^decay, so the canonical value is -1.
    pub interval_decay: f64,
    /// Scale of the forgetting curve, canonically 1/9
    pub interval_factor: f64,
    /// Longest interval ever scheduled, in days
    pub maximum_interval: i64,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            w: DEFAULT_WEIGHTS,
            request_retention: 0.9,
            interval_decay: -1.0,
            interval_factor: 1.0 / 9.0,
            maximum_interval: 36500,
        }
    }
}
