//! Card store collaborator interface
//!
//! Persistence of scheduling state is the caller's concern; the engine only
//! defines the shape of the collaborator it is wired to. Two reference
//! implementations are provided: a JSON-file store and an in-memory store.

use thiserror::Error;
use uuid::Uuid;

use crate::scheduler::{ReviewLogEntry, SchedulingState};

pub mod file;
pub mod memory;

pub use file::FileCardStore;
pub use memory::MemoryCardStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Card not found: {0}")]
    CardNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence interface for scheduling records and the review audit trail.
///
/// Implementations must serialize read-modify-write per card: the engine
/// assumes single-writer-per-card semantics for any invocation sequence, so
/// two concurrent reviews of the same card are a caller bug.
pub trait CardStore {
    /// Load a card's scheduling record
    fn get(&self, card_id: Uuid) -> Result<SchedulingState>;

    /// Persist a card's scheduling record, replacing any previous one
    fn put(&mut self, state: &SchedulingState) -> Result<()>;

    /// Append a review log entry to the audit trail
    fn append(&mut self, entry: &ReviewLogEntry) -> Result<()>;

    /// All scheduling records in the store, in unspecified order
    fn list(&self) -> Result<Vec<SchedulingState>>;
}
