use tracing::{debug, warn};

use crate::error::{WordDayError, WordDayResult};
use crate::model::VocabularyEntry;
use crate::repository::{KeyValueStore, WordCacheRepository};
use crate::source::fetcher::WordFetcher;

/// Network-first word list with a last-known-good local copy.
pub struct WordSource<F: WordFetcher, S: KeyValueStore> {
    fetcher: F,
    cache: WordCacheRepository<S>,
}

impl<F: WordFetcher, S: KeyValueStore> WordSource<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self {
            fetcher,
            cache: WordCacheRepository::new(store),
        }
    }

    /// Fetches and normalizes the list, replacing the cache on success.
    /// An empty remote list is cached as well before failing with `EmptyList`.
    ///
    /// Falls back to the cache when the network fails; errors with `Network` only when
    /// there is nothing cached, and with `EmptyList` when the resolved list has no words.
    pub async fn fetch_words(&self) -> WordDayResult<Vec<VocabularyEntry>> {
        let words = match self.fetcher.fetch().await {
            Ok(file) => {
                let words = file.into_entries();
                if let Err(e) = self.cache.save(&words) {
                    warn!(error = %e, "could not cache word list");
                }
                debug!(count = words.len(), "fetched word list");
                words
            }
            Err(err) => match self.cache.load() {
                Some(cached) => {
                    warn!(error = %err, count = cached.len(), "network failed, using cached word list");
                    cached
                }
                None => return Err(WordDayError::Network(err)),
            },
        };

        if words.is_empty() {
            return Err(WordDayError::EmptyList);
        }
        Ok(words)
    }
}
