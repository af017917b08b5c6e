//! In-memory card store, for tests and in-process embedding

use std::collections::HashMap;

use uuid::Uuid;

use super::{CardStore, Result, StoreError};
use crate::scheduler::{ReviewLogEntry, SchedulingState};

#[derive(Debug, Default)]
pub struct MemoryCardStore {
    states: HashMap<Uuid, SchedulingState>,
    log: Vec<ReviewLogEntry>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The review log accumulated so far, oldest first
    pub fn log(&self) -> &[ReviewLogEntry] {
        &self.log
    }
}

impl CardStore for MemoryCardStore {
    fn get(&self, card_id: Uuid) -> Result<SchedulingState> {
        self.states
            .get(&card_id)
            .cloned()
            .ok_or(StoreError::CardNotFound(card_id))
    }

    fn put(&mut self, state: &SchedulingState) -> Result<()> {
        self.states.insert(state.id, state.clone());
        Ok(())
    }

    fn append(&mut self, entry: &ReviewLogEntry) -> Result<()> {
        self.log.push(entry.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<SchedulingState>> {
        Ok(self.states.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_put_get_list() {
        let mut store = MemoryCardStore::new();
        let state = SchedulingState::new(Uuid::new_v4(), Utc::now());

        store.put(&state).unwrap();
        assert_eq!(store.get(state.id).unwrap().id, state.id);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_get_missing_card() {
        let store = MemoryCardStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(StoreError::CardNotFound(_))
        ));
    }
}
