//! Task submission and bounded status polling.

use std::time::Duration;

use reel_config::PollingConfig;
use reel_core::TaskStatus;
use reel_twelve::AnalysisService;

use crate::{Driver, IngestError, Sleeper};

/// How long and how often to wait for a task.
///
/// With `backoff_multiplier == 1.0` every wait is `interval`; otherwise each
/// wait grows by the multiplier and is capped at `max_interval`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// Status checks, including the first one.
    pub max_attempts: u32,
    pub backoff_multiplier: f64,
    pub max_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&PollingConfig::default())
    }
}

impl From<&PollingConfig> for PollPolicy {
    fn from(config: &PollingConfig) -> Self {
        Self {
            interval: config.interval(),
            max_attempts: config.max_attempts,
            backoff_multiplier: config.backoff_multiplier,
            max_interval: config.max_interval(),
        }
    }
}

impl PollPolicy {
    /// Fixed-interval policy.
    #[must_use]
    pub const fn fixed(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
            backoff_multiplier: 1.0,
            max_interval: interval,
        }
    }

    /// Wait before the second status check.
    #[must_use]
    pub fn first_delay(&self) -> Duration {
        self.interval.min(self.max_interval)
    }

    /// Wait that follows `current`.
    #[must_use]
    pub fn next_delay(&self, current: Duration) -> Duration {
        Duration::try_from_secs_f64(current.as_secs_f64() * self.backoff_multiplier)
            .map_or(self.max_interval, |next| next.min(self.max_interval))
    }
}

impl<S: AnalysisService, Z: Sleeper> Driver<S, Z> {
    /// Resolve the index, submit `video_url`, and wait for a video id.
    ///
    /// # Errors
    ///
    /// Returns the [`IngestError`] describing the first stage that failed.
    pub async fn ingest(&self, video_url: &str) -> Result<String, IngestError> {
        let index_id = self
            .resolve_index()
            .await
            .ok_or_else(|| IngestError::NoIndex {
                index_name: self.settings.index_name.clone(),
            })?;
        let task_id = self.submit(&index_id, video_url).await?;
        self.wait_for_task(&task_id).await
    }

    /// Submit a video to an index. Never retried.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Submission`] if the service rejects the task.
    pub async fn submit(&self, index_id: &str, video_url: &str) -> Result<String, IngestError> {
        match self
            .service
            .create_task(index_id, video_url, &self.settings.language)
            .await
        {
            Ok(task_id) => {
                tracing::info!(%task_id, index_id, video_url, "task submitted");
                Ok(task_id)
            }
            Err(error) => {
                tracing::warn!(%error, index_id, video_url, "task submission failed");
                Err(IngestError::Submission(error))
            }
        }
    }

    /// Poll a task until it is ready, fails, or the attempt budget runs out.
    ///
    /// Sleeps only between attempts, so a budget of `n` attempts sleeps at
    /// most `n - 1` times.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::TaskFailed`], [`IngestError::StatusCheck`],
    /// [`IngestError::MissingVideoId`], or [`IngestError::TimedOut`].
    pub async fn wait_for_task(&self, task_id: &str) -> Result<String, IngestError> {
        let policy = self.settings.poll;
        let mut delay = policy.first_delay();

        for attempt in 1..=policy.max_attempts {
            let task = match self.service.get_task(task_id).await {
                Ok(task) => task,
                Err(error) => {
                    tracing::warn!(%error, task_id, attempt, "status check failed");
                    return Err(IngestError::StatusCheck {
                        task_id: task_id.to_string(),
                        source: error,
                    });
                }
            };

            match task.status {
                TaskStatus::Ready => {
                    return match task.video_id.filter(|id| !id.is_empty()) {
                        Some(video_id) => {
                            tracing::info!(task_id, attempt, %video_id, "task ready");
                            Ok(video_id)
                        }
                        None => {
                            tracing::warn!(task_id, attempt, "task ready without a video id");
                            Err(IngestError::MissingVideoId {
                                task_id: task_id.to_string(),
                            })
                        }
                    };
                }
                status if status.is_failure() => {
                    tracing::warn!(task_id, attempt, %status, "task failed");
                    return Err(IngestError::TaskFailed {
                        task_id: task_id.to_string(),
                        status: status.to_string(),
                    });
                }
                status => {
                    tracing::debug!(task_id, attempt, %status, "task still processing");
                }
            }

            if attempt < policy.max_attempts {
                self.sleeper.sleep(delay).await;
                delay = policy.next_delay(delay);
            }
        }

        tracing::warn!(task_id, attempts = policy.max_attempts, "gave up waiting for task");
        Err(IngestError::TimedOut {
            task_id: task_id.to_string(),
            attempts: policy.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_policy_matches_config_defaults() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(5));
        assert_eq!(policy.max_attempts, 120);
        assert_eq!(policy.next_delay(policy.first_delay()), Duration::from_secs(5));
    }

    #[test]
    fn backoff_grows_and_caps() {
        let policy = PollPolicy {
            interval: Duration::from_secs(2),
            max_attempts: 10,
            backoff_multiplier: 2.0,
            max_interval: Duration::from_secs(10),
        };
        let mut delays = vec![policy.first_delay()];
        for _ in 0..4 {
            delays.push(policy.next_delay(*delays.last().unwrap()));
        }
        assert_eq!(
            delays,
            [2, 4, 8, 10, 10].map(Duration::from_secs).to_vec()
        );
    }

    #[test]
    fn interval_above_cap_is_clamped() {
        let policy = PollPolicy {
            interval: Duration::from_secs(30),
            max_attempts: 3,
            backoff_multiplier: 1.0,
            max_interval: Duration::from_secs(10),
        };
        assert_eq!(policy.first_delay(), Duration::from_secs(10));
    }

    #[test]
    fn non_finite_multiplier_falls_back_to_cap() {
        let policy = PollPolicy {
            backoff_multiplier: f64::NAN,
            ..PollPolicy::fixed(Duration::from_secs(1), 3)
        };
        assert_eq!(policy.next_delay(Duration::from_secs(1)), Duration::from_secs(1));
    }
}
