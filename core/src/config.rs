use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use crate::repository::file::default_data_dir;
use crate::service::access_service::DEFAULT_TRIAL_DAYS;

pub const DEFAULT_WORD_LIST_URL: &str = "https://azonaz.github.io/word-day-a1.json";
const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// How long a correct answer stays on screen before it is committed.
pub const SUCCESS_DELAY: Duration = Duration::from_millis(1200);
/// How long a wrong answer stays on screen before the board resets.
pub const FAILURE_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackDelays {
    pub success: Duration,
    pub failure: Duration,
}

impl Default for FeedbackDelays {
    fn default() -> Self {
        Self {
            success: SUCCESS_DELAY,
            failure: FAILURE_DELAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordDayConfig {
    pub word_list_url: String,
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
    pub delays: FeedbackDelays,
    pub trial_days: i64,
}

impl WordDayConfig {
    /// Defaults overridden by `WORDDAY_URL`, `WORDDAY_DATA_DIR` and `WORDDAY_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let data_dir = match var("WORDDAY_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let timeout_ms = match var("WORDDAY_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring invalid WORDDAY_TIMEOUT_MS");
                DEFAULT_TIMEOUT_MS
            }),
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            word_list_url: var("WORDDAY_URL").unwrap_or_else(|| DEFAULT_WORD_LIST_URL.to_string()),
            data_dir,
            request_timeout: Duration::from_millis(timeout_ms),
            delays: FeedbackDelays::default(),
            trial_days: DEFAULT_TRIAL_DAYS,
        })
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
