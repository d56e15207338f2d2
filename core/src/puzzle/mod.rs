pub mod board;
pub mod session;

pub use board::{LetterTile, PuzzleBoard};
pub use session::{CheckResult, PuzzleSession, SessionPhase};
