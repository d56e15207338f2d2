use anyhow::Result;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::model::{SolvedHistory, SolvedRecord};
use crate::repository::traits::KeyValueStore;

pub const LEGACY_SOLVED_KEY: &str = "wordDaySolved";
pub const SOLVED_HISTORY_KEY: &str = "wordDaySolvedHistory";

pub struct SolvedHistoryRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SolvedHistoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the history, upgrading from the legacy single-record blob when no history exists yet.
    ///
    /// Never writes; the upgraded form is persisted by the next `save_history`.
    pub fn load_history(&self) -> SolvedHistory {
        let history = self.read_blob::<SolvedHistory>(SOLVED_HISTORY_KEY);
        let legacy = if history.is_none() {
            self.read_blob::<SolvedRecord>(LEGACY_SOLVED_KEY)
        } else {
            None
        };
        upgrade_history(history, legacy)
    }

    pub fn save_history(&self, history: &SolvedHistory) -> Result<()> {
        let bytes = serde_json::to_vec(history)?;
        self.store.set(SOLVED_HISTORY_KEY, &bytes)
    }

    fn read_blob<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.store.get(key) {
            Ok(bytes) => bytes?,
            Err(e) => {
                warn!(key, error = %e, "could not read solved state");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "ignoring undecodable solved state");
                None
            }
        }
    }
}

/// History wins when present; otherwise the legacy record becomes a one-element history.
pub fn upgrade_history(
    history: Option<SolvedHistory>,
    legacy: Option<SolvedRecord>,
) -> SolvedHistory {
    match (history, legacy) {
        (Some(history), _) => history,
        (None, Some(record)) => {
            info!(day = %record.local_day(), "migrating legacy solved record");
            SolvedHistory::from_records(vec![record])
        }
        (None, None) => SolvedHistory::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VocabularyEntry;
    use crate::repository::MemoryKeyValueStore;
    use chrono::{Local, TimeZone, Utc};

    fn record(day: u32, gr: &str) -> SolvedRecord {
        let date = Local
            .with_ymd_and_hms(2026, 4, day, 10, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        SolvedRecord::new(date, VocabularyEntry::new(gr.into(), "en".into(), gr.into()))
    }

    #[test]
    fn test_empty_store_gives_empty_history() {
        let repo = SolvedHistoryRepository::new(MemoryKeyValueStore::new());
        assert!(repo.load_history().is_empty());
    }

    #[test]
    fn test_legacy_record_is_upgraded() {
        let store = MemoryKeyValueStore::new();
        let legacy = record(7, "νερό");
        store
            .set(LEGACY_SOLVED_KEY, &serde_json::to_vec(&legacy).unwrap())
            .unwrap();

        let repo = SolvedHistoryRepository::new(store.clone());
        let history = repo.load_history();

        assert_eq!(history.records(), &[legacy]);
        // Reading alone does not write the new format.
        assert!(!store.contains(SOLVED_HISTORY_KEY));
    }

    #[test]
    fn test_history_takes_precedence_over_legacy() {
        let store = MemoryKeyValueStore::new();
        store
            .set(LEGACY_SOLVED_KEY, &serde_json::to_vec(&record(1, "παλιό")).unwrap())
            .unwrap();
        let repo = SolvedHistoryRepository::new(store.clone());
        let saved = SolvedHistory::from_records(vec![record(2, "β"), record(3, "γ")]);
        repo.save_history(&saved).unwrap();

        assert_eq!(repo.load_history(), saved);
        assert_eq!(repo.load_history(), saved);
    }

    #[test]
    fn test_corrupt_history_falls_back_to_legacy() {
        let store = MemoryKeyValueStore::new();
        store.set(SOLVED_HISTORY_KEY, b"garbage").unwrap();
        store
            .set(LEGACY_SOLVED_KEY, &serde_json::to_vec(&record(5, "ε")).unwrap())
            .unwrap();

        let history = SolvedHistoryRepository::new(store).load_history();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_corrupt_everything_is_absent() {
        let store = MemoryKeyValueStore::new();
        store.set(SOLVED_HISTORY_KEY, b"[").unwrap();
        store.set(LEGACY_SOLVED_KEY, b"{").unwrap();
        assert!(SolvedHistoryRepository::new(store).load_history().is_empty());
    }
}
