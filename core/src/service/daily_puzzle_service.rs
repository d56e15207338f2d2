use chrono::Utc;
use tracing::{debug, info};

use crate::error::WordDayResult;
use crate::model::{DailyPuzzleState, PuzzleStats, SolvedHistory, SolvedRecord, VocabularyEntry};
use crate::repository::{KeyValueStore, SolvedHistoryRepository};
use crate::source::{WordFetcher, WordSource};
use crate::time::{index_for, Clock, SystemClock};
use crate::usecase::compute_stats;

pub struct DailyPuzzleService<F: WordFetcher, S: KeyValueStore, C: Clock = SystemClock> {
    source: WordSource<F, S>,
    history: SolvedHistoryRepository<S>,
    clock: C,
}

impl<F: WordFetcher, S: KeyValueStore + Clone> DailyPuzzleService<F, S, SystemClock> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self::with_clock(fetcher, store, SystemClock)
    }
}

impl<F: WordFetcher, S: KeyValueStore + Clone, C: Clock> DailyPuzzleService<F, S, C> {
    pub fn with_clock(fetcher: F, store: S, clock: C) -> Self {
        Self {
            source: WordSource::new(fetcher, store.clone()),
            history: SolvedHistoryRepository::new(store),
            clock,
        }
    }
}

impl<F: WordFetcher, S: KeyValueStore, C: Clock> DailyPuzzleService<F, S, C> {
    /// Picks today's word and reports whether today's solve already matches it.
    pub async fn load_word_of_day(&self) -> WordDayResult<DailyPuzzleState> {
        let words = self.source.fetch_words().await?;
        let now = self.clock.now();
        let index = index_for(words.len(), now);
        let selected = &words[index];
        debug!(index, word = selected.greek_trimmed(), "selected word of the day");

        let history = self.history.load_history();
        if let Some(record) = history.record_for_day(now.date_naive()) {
            if record.word.greek_trimmed() == selected.greek_trimmed() {
                return Ok(DailyPuzzleState {
                    word: record.word.clone(),
                    solved: true,
                });
            }
        }

        Ok(DailyPuzzleState {
            word: selected.clone(),
            solved: false,
        })
    }

    /// Records `word` as today's solve, replacing any earlier solve from the same day.
    pub fn mark_solved(&self, word: &VocabularyEntry) -> WordDayResult<()> {
        let mut history = self.history.load_history();
        let record = SolvedRecord::new(self.clock.now().with_timezone(&Utc), word.clone());
        let day = record.local_day();
        history.upsert(record);
        self.history.save_history(&history)?;
        info!(%day, word = word.greek_trimmed(), "word of the day solved");
        Ok(())
    }

    pub fn compute_stats(&self) -> PuzzleStats {
        compute_stats(&self.history.load_history())
    }

    pub fn solved_history(&self) -> SolvedHistory {
        self.history.load_history()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
