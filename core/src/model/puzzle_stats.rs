use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PuzzleStats {
    /// Distinct local days with a committed solve.
    pub total_solved: usize,
    /// Consecutive solved days ending at the most recent solved day.
    pub current_streak: usize,
}
