use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::repository::KeyValueStore;
use crate::time::{Clock, SystemClock};

pub const TRIAL_START_KEY: &str = "trainingTrialA1StartDate";
pub const UNLOCK_KEY: &str = "trainingA1Unlocked";
pub const DEFAULT_TRIAL_DAYS: i64 = 7;

/// Entitlement check consulted before opening training content.
pub trait AccessGate {
    fn has_access(&self) -> bool;
    fn start_trial_if_needed(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessState {
    pub has_access: bool,
    pub in_trial: bool,
    /// `None` before the trial starts and after an unlock.
    pub days_left: Option<i64>,
}

/// Time-boxed trial with a permanent unlock flag.
pub struct TrainingAccess<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    trial_days: i64,
}

impl<S: KeyValueStore> TrainingAccess<S, SystemClock> {
    pub fn new(store: S, trial_days: i64) -> Self {
        Self::with_clock(store, SystemClock, trial_days)
    }
}

impl<S: KeyValueStore, C: Clock> TrainingAccess<S, C> {
    pub fn with_clock(store: S, clock: C, trial_days: i64) -> Self {
        Self {
            store,
            clock,
            trial_days,
        }
    }

    pub fn state(&self) -> AccessState {
        if self.is_unlocked() {
            return AccessState {
                has_access: true,
                in_trial: false,
                days_left: None,
            };
        }

        let Some(started) = self.trial_start() else {
            return AccessState {
                has_access: false,
                in_trial: false,
                days_left: None,
            };
        };

        let days_passed = (self.clock.now().with_timezone(&Utc) - started).num_days();
        if days_passed < self.trial_days {
            AccessState {
                has_access: true,
                in_trial: true,
                days_left: Some((self.trial_days - days_passed).max(0)),
            }
        } else {
            AccessState {
                has_access: false,
                in_trial: false,
                days_left: Some(0),
            }
        }
    }

    pub fn set_unlocked(&self) -> Result<()> {
        self.store.set(UNLOCK_KEY, &serde_json::to_vec(&true)?)?;
        info!("training unlocked");
        Ok(())
    }

    fn is_unlocked(&self) -> bool {
        self.read::<bool>(UNLOCK_KEY).unwrap_or(false)
    }

    fn trial_start(&self) -> Option<DateTime<Utc>> {
        self.read(TRIAL_START_KEY)
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "could not read access state");
                None
            }
        }
    }
}

impl<S: KeyValueStore, C: Clock> AccessGate for TrainingAccess<S, C> {
    fn has_access(&self) -> bool {
        self.state().has_access
    }

    fn start_trial_if_needed(&self) -> Result<()> {
        if self.trial_start().is_some() {
            return Ok(());
        }
        let now = self.clock.now().with_timezone(&Utc);
        self.store.set(TRIAL_START_KEY, &serde_json::to_vec(&now)?)?;
        info!(started = %now, "training trial started");
        Ok(())
    }
}
