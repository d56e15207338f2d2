use anyhow::Result;
use tracing::{debug, warn};

use crate::model::VocabularyEntry;
use crate::repository::traits::KeyValueStore;

pub const WORD_CACHE_KEY: &str = "wordDayCache";

/// Last successfully fetched word list.
#[derive(Clone)]
pub struct WordCacheRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WordCacheRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Missing, unreadable or undecodable blobs all count as "no cache".
    pub fn load(&self) -> Option<Vec<VocabularyEntry>> {
        let bytes = match self.store.get(WORD_CACHE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("word cache is empty");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "could not read word cache");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(words) => Some(words),
            Err(e) => {
                warn!(error = %e, "discarding undecodable word cache");
                None
            }
        }
    }

    /// Replaces the cached list.
    pub fn save(&self, words: &[VocabularyEntry]) -> Result<()> {
        let bytes = serde_json::to_vec(words)?;
        self.store.set(WORD_CACHE_KEY, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryKeyValueStore;

    #[test]
    fn test_save_replaces_previous_list() {
        let store = MemoryKeyValueStore::new();
        let cache = WordCacheRepository::new(store.clone());
        let a = VocabularyEntry::new("α".into(), "a".into(), "α".into());
        let b = VocabularyEntry::new("β".into(), "b".into(), "β".into());

        cache.save(&[a.clone(), b.clone()]).unwrap();
        cache.save(&[b.clone()]).unwrap();

        assert_eq!(cache.load(), Some(vec![b]));
    }

    #[test]
    fn test_corrupt_blob_is_a_miss() {
        let store = MemoryKeyValueStore::new();
        store.set(WORD_CACHE_KEY, b"{not json").unwrap();
        let cache = WordCacheRepository::new(store);
        assert_eq!(cache.load(), None);
    }
}
