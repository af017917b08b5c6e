//! engram — FSRS-style spaced repetition scheduling engine
//!
//! This crate provides:
//! - A pure, deterministic review transform: card state + rating in, next
//!   state + audit log entry out ([`scheduler::review_card`])
//! - The per-card scheduling data model and engine configuration
//! - Pure queries over card collections (due cards, phase buckets)
//! - The card-store collaborator interface with JSON-file and in-memory
//!   reference implementations
//! - The study-session flow gluing store and engine together
//!
//! The engine performs no I/O and holds no shared state; it is safe to call
//! from any thread. Persistence and rating capture belong to the caller.

pub mod scheduler;
pub mod session;
pub mod store;

pub use scheduler::{
    cards_by_state, create_initial_state, due_cards, review_card, CardPhase, Rating,
    ReviewLogEntry, ReviewOutcome, SchedulerError, SchedulerParams, SchedulingState, StateBuckets,
};
pub use session::{review_stats, submit_review, ReviewStats, SessionError};
pub use store::{CardStore, FileCardStore, MemoryCardStore, StoreError};
