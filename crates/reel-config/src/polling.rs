//! Task polling budget.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default seconds between status checks.
const fn default_interval_secs() -> u64 {
    5
}

/// Default status checks before giving up.
const fn default_max_attempts() -> u32 {
    120
}

/// Default growth factor between sleeps (1.0 = fixed interval).
const fn default_backoff_multiplier() -> f64 {
    1.0
}

/// Default cap on a single sleep.
const fn default_max_interval_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    #[serde(default = "default_max_interval_secs")]
    pub max_interval_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_attempts: default_max_attempts(),
            backoff_multiplier: default_backoff_multiplier(),
            max_interval_secs: default_max_interval_secs(),
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    #[must_use]
    pub const fn max_interval(&self) -> Duration {
        Duration::from_secs(self.max_interval_secs)
    }

    /// Worst-case time spent sleeping before the budget runs out.
    #[must_use]
    pub fn worst_case_wait(&self) -> Duration {
        let cap = self.max_interval();
        let mut total = Duration::ZERO;
        let mut delay = self.interval().min(cap);
        for _ in 1..self.max_attempts {
            total = total.saturating_add(delay);
            delay = Duration::try_from_secs_f64(delay.as_secs_f64() * self.backoff_multiplier)
                .map_or(cap, |next| next.min(cap));
        }
        total
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::invalid(
                "polling.max_attempts",
                "must be at least 1",
            ));
        }
        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 1.0 {
            return Err(ConfigError::invalid(
                "polling.backoff_multiplier",
                format!("{} is below 1.0", self.backoff_multiplier),
            ));
        }
        if self.max_interval_secs < self.interval_secs {
            return Err(ConfigError::invalid(
                "polling.max_interval_secs",
                "must not be smaller than polling.interval_secs",
            ));
        }
        Ok(())
    }
}
