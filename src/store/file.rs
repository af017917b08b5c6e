//! JSON-file card store
//!
//! Directory structure:
//! ```text
//! {root}/
//! ├── states/
//! │   └── {card-id}.json   # Card scheduling state, pretty-printed
//! └── review-log.jsonl     # Append-only review log, one entry per line
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use uuid::Uuid;

use super::{CardStore, Result, StoreError};
use crate::scheduler::{ReviewLogEntry, SchedulingState};

/// File-backed store keeping one JSON document per card
pub struct FileCardStore {
    root: PathBuf,
}

impl FileCardStore {
    /// Open a store rooted at `root`, creating its layout if needed
    pub fn new(root: PathBuf) -> Result<Self> {
        let store = Self { root };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<()> {
        fs::create_dir_all(self.states_dir())?;
        Ok(())
    }

    fn states_dir(&self) -> PathBuf {
        self.root.join("states")
    }

    fn state_path(&self, card_id: Uuid) -> PathBuf {
        self.states_dir().join(format!("{}.json", card_id))
    }

    fn log_path(&self) -> PathBuf {
        self.root.join("review-log.jsonl")
    }

    /// Read back the full review log, oldest first
    pub fn read_log(&self) -> Result<Vec<ReviewLogEntry>> {
        let log_path = self.log_path();
        if !log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&log_path)?;
        let mut entries = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            entries.push(serde_json::from_str(line)?);
        }
        Ok(entries)
    }
}

impl CardStore for FileCardStore {
    fn get(&self, card_id: Uuid) -> Result<SchedulingState> {
        let path = self.state_path(card_id);
        if !path.exists() {
            return Err(StoreError::CardNotFound(card_id));
        }

        let content = fs::read_to_string(&path)?;
        let state: SchedulingState = serde_json::from_str(&content)?;
        Ok(state)
    }

    fn put(&mut self, state: &SchedulingState) -> Result<()> {
        let path = self.state_path(state.id);
        fs::write(&path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }

    fn append(&mut self, entry: &ReviewLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())?;
        writeln!(file, "{}", serde_json::to_string(entry)?)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<SchedulingState>> {
        let states_dir = self.states_dir();
        if !states_dir.exists() {
            return Ok(Vec::new());
        }

        let mut states = Vec::new();
        for entry in fs::read_dir(&states_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                let state: SchedulingState = serde_json::from_str(&content)?;
                states.push(state);
            }
        }

        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{review_card, Rating, SchedulerParams};
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_store() -> (FileCardStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCardStore::new(temp_dir.path().to_path_buf()).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_put_and_get_state() {
        let (mut store, _temp) = create_test_store();
        let now = Utc::now();
        let state = SchedulingState::new(Uuid::new_v4(), now);

        store.put(&state).unwrap();
        let loaded = store.get(state.id).unwrap();

        assert_eq!(loaded.id, state.id);
        assert_eq!(loaded.phase, state.phase);
        assert_eq!(loaded.due, state.due);
    }

    #[test]
    fn test_get_missing_card() {
        let (store, _temp) = create_test_store();
        let missing = Uuid::new_v4();

        match store.get(missing) {
            Err(StoreError::CardNotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected CardNotFound, got {:?}", other.map(|s| s.id)),
        }
    }

    #[test]
    fn test_put_replaces_existing_state() {
        let (mut store, _temp) = create_test_store();
        let now = Utc::now();
        let state = SchedulingState::new(Uuid::new_v4(), now);
        store.put(&state).unwrap();

        let updated = review_card(&SchedulerParams::default(), &state, Rating::Good, now).state;
        store.put(&updated).unwrap();

        let loaded = store.get(state.id).unwrap();
        assert_eq!(loaded.reps, 1);
        assert_eq!(loaded.stability, updated.stability);
    }

    #[test]
    fn test_list_states() {
        let (mut store, _temp) = create_test_store();
        let now = Utc::now();

        for _ in 0..3 {
            store.put(&SchedulingState::new(Uuid::new_v4(), now)).unwrap();
        }

        let states = store.list().unwrap();
        assert_eq!(states.len(), 3);
    }

    #[test]
    fn test_append_and_read_log() {
        let (mut store, _temp) = create_test_store();
        let now = Utc::now();
        let params = SchedulerParams::default();
        let state = SchedulingState::new(Uuid::new_v4(), now);

        let first = review_card(&params, &state, Rating::Good, now);
        let second = review_card(&params, &first.state, Rating::Again, now);
        store.append(&first.log).unwrap();
        store.append(&second.log).unwrap();

        let entries = store.read_log().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rating, Rating::Good);
        assert_eq!(entries[1].rating, Rating::Again);
        assert_eq!(entries[1].card_id, state.id);
    }
}
