pub mod config;
pub mod error;
pub mod model;
pub mod puzzle;
pub mod repository;
pub mod service;
pub mod source;
pub mod time;
pub mod usecase;

pub use config::{FeedbackDelays, WordDayConfig};
pub use error::{FetchError, WordDayError, WordDayResult};
pub use model::{DailyPuzzleState, PuzzleStats, SolvedHistory, SolvedRecord, VocabularyEntry};
pub use puzzle::{CheckResult, LetterTile, PuzzleBoard, PuzzleSession, SessionPhase};
pub use repository::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use service::{AccessGate, AccessState, DailyPuzzleService, TrainingAccess};
pub use source::{HttpWordFetcher, WordFetcher, WordSource};
pub use time::{Clock, FixedClock, SystemClock};

/// Daily puzzle wired to the HTTP word list and the on-disk store.
pub type AppPuzzleService = DailyPuzzleService<HttpWordFetcher, FileKeyValueStore, SystemClock>;
pub type AppPuzzleSession = PuzzleSession<HttpWordFetcher, FileKeyValueStore, SystemClock>;

pub fn open_service(config: &WordDayConfig) -> anyhow::Result<AppPuzzleService> {
    let store = FileKeyValueStore::new(Some(config.data_dir.clone()))?;
    let fetcher = HttpWordFetcher::new(config.word_list_url.clone(), config.request_timeout)?;
    Ok(DailyPuzzleService::new(fetcher, store))
}

pub fn open_session(config: &WordDayConfig) -> anyhow::Result<AppPuzzleSession> {
    Ok(PuzzleSession::new(open_service(config)?, config.delays))
}
