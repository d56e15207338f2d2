use std::time::Duration;

use tracing::{error, warn};
use uuid::Uuid;

use crate::config::FeedbackDelays;
use crate::model::VocabularyEntry;
use crate::puzzle::board::PuzzleBoard;
use crate::repository::KeyValueStore;
use crate::service::DailyPuzzleService;
use crate::source::WordFetcher;
use crate::time::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckResult {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    /// Carries the internal diagnostic; the UI shows its own message and a retry action.
    Error(String),
    Playing,
    /// Feedback is showing; all input is ignored until the check finishes.
    Checking(CheckResult),
    Solved,
}

/// Interactive state for one day's puzzle. The owner of `&mut self` is the only writer.
pub struct PuzzleSession<F: WordFetcher, S: KeyValueStore, C: Clock> {
    service: DailyPuzzleService<F, S, C>,
    delays: FeedbackDelays,
    phase: SessionPhase,
    word: Option<VocabularyEntry>,
    board: PuzzleBoard,
    show_help: bool,
    last_result: Option<CheckResult>,
}

impl<F: WordFetcher, S: KeyValueStore, C: Clock> PuzzleSession<F, S, C> {
    pub fn new(service: DailyPuzzleService<F, S, C>, delays: FeedbackDelays) -> Self {
        Self {
            service,
            delays,
            phase: SessionPhase::Loading,
            word: None,
            board: PuzzleBoard::empty(),
            show_help: false,
            last_result: None,
        }
    }

    /// (Re)loads today's puzzle from the top. Also recovers a check abandoned mid-delay.
    pub async fn load(&mut self) {
        self.phase = SessionPhase::Loading;
        self.show_help = false;
        self.last_result = None;

        match self.service.load_word_of_day().await {
            Ok(state) => {
                if state.solved {
                    self.board = PuzzleBoard::empty();
                    self.phase = SessionPhase::Solved;
                } else {
                    self.board = PuzzleBoard::new(state.word.greek_trimmed());
                    self.phase = SessionPhase::Playing;
                }
                self.word = Some(state.word);
            }
            Err(e) => {
                error!(error = %e, "could not load word of the day");
                self.word = None;
                self.board = PuzzleBoard::empty();
                self.phase = SessionPhase::Error(e.to_string());
            }
        }
    }

    pub fn place_letter(&mut self, tile_id: Uuid) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        if self.board.place(tile_id) {
            self.last_result = None;
        }
    }

    pub fn delete_last_letter(&mut self) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        if self.board.delete_last() {
            self.last_result = None;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn is_ok_enabled(&self) -> bool {
        self.phase == SessionPhase::Playing && self.word.is_some() && self.board.is_full()
    }

    /// Grades the board and enters `Checking`. `None` when a check is not allowed right now.
    pub fn begin_check(&mut self) -> Option<CheckResult> {
        if !self.is_ok_enabled() {
            return None;
        }
        let word = self.word.as_ref()?;
        let result = if self.board.attempt() == word.greek_trimmed() {
            CheckResult::Success
        } else {
            CheckResult::Failure
        };
        self.phase = SessionPhase::Checking(result);
        self.last_result = Some(result);
        Some(result)
    }

    /// Applies the outcome of a pending check: commit and solve, or reset the board.
    pub fn finish_check(&mut self) {
        let SessionPhase::Checking(result) = self.phase else {
            return;
        };

        match result {
            CheckResult::Success => {
                if let Some(word) = &self.word {
                    if let Err(e) = self.service.mark_solved(word) {
                        warn!(error = %e, "could not persist solve");
                    }
                }
                self.board.clear();
                self.phase = SessionPhase::Solved;
            }
            CheckResult::Failure => {
                self.board.reset();
                self.phase = SessionPhase::Playing;
            }
        }
        self.last_result = None;
    }

    /// `begin_check`, wait out the feedback delay, then `finish_check`.
    ///
    /// Dropping the future during the delay leaves the session in `Checking` with nothing persisted.
    pub async fn check_answer(&mut self) -> Option<CheckResult> {
        let result = self.begin_check()?;
        tokio::time::sleep(self.delay_for(result)).await;
        self.finish_check();
        Some(result)
    }

    pub fn delay_for(&self, result: CheckResult) -> Duration {
        match result {
            CheckResult::Success => self.delays.success,
            CheckResult::Failure => self.delays.failure,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_solved(&self) -> bool {
        self.phase == SessionPhase::Solved
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.phase, SessionPhase::Checking(_))
    }

    pub fn word(&self) -> Option<&VocabularyEntry> {
        self.word.as_ref()
    }

    pub fn board(&self) -> &PuzzleBoard {
        &self.board
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Feedback of the most recent check while it is on screen.
    pub fn result(&self) -> Option<CheckResult> {
        self.last_result
    }

    pub fn service(&self) -> &DailyPuzzleService<F, S, C> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PuzzleStats;
    use crate::repository::MemoryKeyValueStore;
    use crate::source::word_source::tests::FakeFetcher;
    use crate::time::FixedClock;
    use chrono::{Local, TimeZone};

    type TestSession = PuzzleSession<FakeFetcher, MemoryKeyValueStore, FixedClock>;

    fn session_with(fetcher: FakeFetcher, store: &MemoryKeyValueStore) -> TestSession {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap());
        let service = DailyPuzzleService::with_clock(fetcher, store.clone(), clock);
        PuzzleSession::new(service, FeedbackDelays::default())
    }

    fn session(store: &MemoryKeyValueStore) -> TestSession {
        session_with(FakeFetcher::serving(vec![("το νερό", "water")]), store)
    }

    fn spell(session: &mut TestSession, text: &str) {
        for value in text.chars() {
            let id = session.board().find_unused(value).unwrap();
            session.place_letter(id);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_enters_playing() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;

        assert_eq!(s.phase(), &SessionPhase::Playing);
        assert_eq!(s.board().slots().len(), 4);
        assert!(!s.is_ok_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_word_can_be_submitted() {
        let store = MemoryKeyValueStore::new();
        let mut s = session_with(FakeFetcher::serving(vec![("  ", "blank")]), &store);
        s.load().await;

        assert_eq!(s.phase(), &SessionPhase::Playing);
        assert!(s.board().slots().is_empty());
        assert!(s.is_ok_enabled());
        assert_eq!(s.check_answer().await, Some(CheckResult::Success));
        assert!(s.is_solved());
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_answer_solves_after_delay() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;
        spell(&mut s, "νερό");
        assert!(s.is_ok_enabled());

        let started = tokio::time::Instant::now();
        assert_eq!(s.check_answer().await, Some(CheckResult::Success));

        assert!(started.elapsed() >= Duration::from_millis(1200));
        assert!(s.is_solved());
        assert!(s.board().slots().is_empty());
        assert!(s.board().tiles().is_empty());
        assert_eq!(
            s.service().compute_stats(),
            PuzzleStats { total_solved: 1, current_streak: 1 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_resets_board() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;
        spell(&mut s, "ρνεό");

        assert_eq!(s.check_answer().await, Some(CheckResult::Failure));
        assert_eq!(s.phase(), &SessionPhase::Playing);
        assert!(!s.is_solved());
        assert!(s.board().slots().iter().all(Option::is_none));
        assert!(s.board().tiles().iter().all(|t| !t.used));
        assert!(s.service().solved_history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_blocked_while_checking() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;
        spell(&mut s, "ρνεό");

        assert_eq!(s.begin_check(), Some(CheckResult::Failure));
        assert!(s.is_checking());
        assert_eq!(s.begin_check(), None);

        let before = s.board().clone();
        s.delete_last_letter();
        assert_eq!(s.board(), &before);

        s.finish_check();
        assert_eq!(s.phase(), &SessionPhase::Playing);
        assert_eq!(s.result(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_partial_board_cannot_be_checked() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;
        spell(&mut s, "νε");

        assert_eq!(s.check_answer().await, None);
        assert_eq!(s.phase(), &SessionPhase::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_after_solve_shows_solved() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;
        spell(&mut s, "νερό");
        s.check_answer().await;

        let mut fresh = session(&store);
        fresh.load().await;
        assert!(fresh.is_solved());
        assert_eq!(fresh.word().map(|w| w.greek_full()), Some("το νερό"));
        assert!(!fresh.is_ok_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_check_persists_nothing() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;
        spell(&mut s, "νερό");

        let pending = tokio::time::timeout(Duration::from_millis(100), s.check_answer()).await;
        assert!(pending.is_err());
        assert!(s.is_checking());
        assert!(s.service().solved_history().is_empty());

        s.load().await;
        assert_eq!(s.phase(), &SessionPhase::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_error_then_retry() {
        let store = MemoryKeyValueStore::new();
        let mut offline = session_with(FakeFetcher::offline(), &store);
        offline.load().await;
        assert!(matches!(offline.phase(), SessionPhase::Error(_)));
        assert!(offline.word().is_none());

        let mut online = session(&store);
        online.load().await;
        assert_eq!(online.phase(), &SessionPhase::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_help_toggle_is_independent() {
        let store = MemoryKeyValueStore::new();
        let mut s = session(&store);
        s.load().await;
        s.toggle_help();
        assert!(s.show_help());
        assert_eq!(s.phase(), &SessionPhase::Playing);
        s.toggle_help();
        assert!(!s.show_help());
    }
}
