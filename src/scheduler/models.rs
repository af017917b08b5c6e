//! Data models for the scheduling engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the scheduling engine.
///
/// The engine itself is total over its typed inputs; the only hard error is a
/// caller passing a rating integer outside the 1-4 scale.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid rating: {0} (expected 1=Again, 2=Hard, 3=Good, 4=Easy)")]
    InvalidRating(i32),
}

/// Learner's self-assessment of a single review
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    /// Forgot the card
    Again = 1,
    /// Recalled with serious difficulty
    Hard = 2,
    /// Recalled correctly
    Good = 3,
    /// Recalled effortlessly
    Easy = 4,
}

impl Rating {
    /// Numeric grade on the 1-4 scale used by the update formulas
    pub fn grade(self) -> f64 {
        self as i32 as f64
    }
}

impl TryFrom<i32> for Rating {
    type Error = SchedulerError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Again),
            2 => Ok(Rating::Hard),
            3 => Ok(Rating::Good),
            4 => Ok(Rating::Easy),
            other => Err(SchedulerError::InvalidRating(other)),
        }
    }
}

/// Phase of a card in the spaced repetition system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardPhase {
    /// Never reviewed
    New,
    /// In initial learning phase
    Learning,
    /// Regular spaced review
    Review,
    /// Failed and re-learning
    Relearning,
}

impl Default for CardPhase {
    fn default() -> Self {
        Self::New
    }
}

/// Current spaced repetition state for a card
///
/// Owned by the caller; the engine never mutates one in place — every review
/// produces a fresh value from the old one (see [`crate::scheduler::review_card`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingState {
    pub id: Uuid,
    /// Memory stability in days; at least 0.1 after any update
    #[serde(default)]
    pub stability: f64,
    /// Intrinsic card hardness, clamped to [1, 10]
    #[serde(default = "default_difficulty")]
    pub difficulty: f64,
    /// Days since the previous review at the moment of the current one
    #[serde(default)]
    pub elapsed_days: f64,
    /// Most recently computed interval in days
    #[serde(default)]
    pub scheduled_days: i64,
    /// Total scheduling passes
    #[serde(default)]
    pub reps: u32,
    /// Number of Again (forgot) reviews
    #[serde(default)]
    pub lapses: u32,
    #[serde(default)]
    pub phase: CardPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_review: Option<DateTime<Utc>>,
    /// When the card should next be shown; a missing value means always due
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
}

fn default_difficulty() -> f64 {
    5.0
}

impl SchedulingState {
    /// Initial record for a card that has never been reviewed
    pub fn new(id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            stability: 0.0,
            difficulty: default_difficulty(),
            elapsed_days: 0.0,
            scheduled_days: 0,
            reps: 0,
            lapses: 0,
            phase: CardPhase::New,
            last_review: None,
            due: Some(now),
        }
    }

    /// Check if the card is due for review at the given time
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.due {
            Some(due) => due <= now,
            None => true,
        }
    }
}

/// A record of a single review, snapshotting the resulting state
///
/// Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLogEntry {
    pub card_id: Uuid,
    pub rating: Rating,
    pub phase: CardPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    pub stability: f64,
    pub difficulty: f64,
    pub elapsed_days: f64,
    pub scheduled_days: i64,
    /// When the review occurred
    pub reviewed_at: DateTime<Utc>,
}

/// Result of a single review: the card's next state plus its audit entry
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub state: SchedulingState,
    pub log: ReviewLogEntry,
}
