//! # reel-driver
//!
//! Job drivers built on an [`AnalysisService`]:
//!
//! - **compliance**: ingest a video, summarize it, degrade through the
//!   fallback tiers, then run the policy engine. Always yields a
//!   [`ComplianceReport`](reel_core::ComplianceReport).
//! - **ingest**: index a video and return a placeholder embedding.
//! - **qa**: search the index and stream an answer from the generation model.
//!
//! Every item is processed sequentially: one task, one polling loop at a
//! time. Waiting between status checks goes through a [`Sleeper`] so tests
//! run without real delays.

mod compliance;
mod error;
mod fallback;
mod index;
mod ingest;
mod poll;
mod qa;
mod sleep;

pub use compliance::{Submission, demo_submissions};
pub use error::IngestError;
pub use fallback::{DEFAULT_DESCRIPTION, FallbackCatalog};
pub use ingest::{EMBEDDING_DIM, IngestOutcome, text_embed};
pub use poll::PollPolicy;
pub use qa::Answer;
pub use sleep::{Sleeper, TokioSleeper};

use reel_config::{ReelConfig, SearchConfig};
use reel_core::IndexModel;
use reel_policy::PolicyEngine;
use reel_twelve::AnalysisService;

/// Per-run settings copied out of [`ReelConfig`].
#[derive(Debug, Clone)]
struct Settings {
    index_name: String,
    models: Vec<IndexModel>,
    language: String,
    poll: PollPolicy,
    search: SearchConfig,
}

impl From<&ReelConfig> for Settings {
    fn from(config: &ReelConfig) -> Self {
        Self {
            index_name: config.service.index_name.clone(),
            models: config.service.models.clone(),
            language: config.service.language.clone(),
            poll: PollPolicy::from(&config.polling),
            search: config.search.clone(),
        }
    }
}

/// Drives pipelines against one service.
pub struct Driver<S, Z = TokioSleeper> {
    service: S,
    sleeper: Z,
    settings: Settings,
    catalog: FallbackCatalog,
    policy: PolicyEngine,
}

impl<S: AnalysisService> Driver<S> {
    /// Driver with real sleeps, the built-in fallback catalog, and the
    /// default rule set.
    #[must_use]
    pub fn new(service: S, config: &ReelConfig) -> Self {
        Self {
            service,
            sleeper: TokioSleeper,
            settings: Settings::from(config),
            catalog: FallbackCatalog::default(),
            policy: PolicyEngine::default(),
        }
    }
}

impl<S: AnalysisService, Z: Sleeper> Driver<S, Z> {
    #[must_use]
    pub fn with_sleeper<Y: Sleeper>(self, sleeper: Y) -> Driver<S, Y> {
        Driver {
            service: self.service,
            sleeper,
            settings: self.settings,
            catalog: self.catalog,
            policy: self.policy,
        }
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: FallbackCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PolicyEngine) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.settings.poll = poll;
        self
    }

    pub const fn service(&self) -> &S {
        &self.service
    }

    pub const fn sleeper(&self) -> &Z {
        &self.sleeper
    }

    pub const fn policy(&self) -> &PolicyEngine {
        &self.policy
    }

    pub const fn poll_policy(&self) -> &PollPolicy {
        &self.settings.poll
    }
}
