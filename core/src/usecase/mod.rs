pub mod streak;

pub use streak::{compute_stats, current_streak};
