pub mod access_service;
pub mod daily_puzzle_service;

pub use access_service::{AccessGate, AccessState, TrainingAccess};
pub use daily_puzzle_service::DailyPuzzleService;
