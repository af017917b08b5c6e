//! Spaced repetition scheduling engine
//!
//! This module provides:
//! - The FSRS-style review transform ([`review_card`]): rating + elapsed time
//!   in, next memory state + audit log entry out
//! - The per-card scheduling record ([`SchedulingState`]) and review log model
//! - Engine configuration ([`SchedulerParams`]) with canonical defaults
//! - Pure collection queries ([`due_cards`], [`cards_by_state`])
//!
//! The engine is deterministic and side-effect free; identical inputs always
//! produce identical schedules. Callers own persistence and must serialize
//! read-modify-write per card (single writer per card).

pub mod algorithm;
pub mod models;
pub mod params;
pub mod queries;

pub use algorithm::{review_card, retrievability};
pub use models::{
    CardPhase, Rating, ReviewLogEntry, ReviewOutcome, SchedulerError, SchedulingState,
};
pub use params::SchedulerParams;
pub use queries::{cards_by_state, due_cards, StateBuckets};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Construct the scheduling record for a card that has never been reviewed
pub fn create_initial_state(id: Uuid, now: DateTime<Utc>) -> SchedulingState {
    SchedulingState::new(id, now)
}
