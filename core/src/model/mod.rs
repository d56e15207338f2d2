pub mod entry;
pub mod puzzle_stats;
pub mod solved;

pub use entry::{RawEntry, Vocabulary, VocabularyEntry, VocabularyFile};
pub use puzzle_stats::PuzzleStats;
pub use solved::{DailyPuzzleState, SolvedHistory, SolvedRecord};
