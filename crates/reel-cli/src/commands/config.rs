use reel_config::ReelConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output;

#[derive(Debug, Serialize)]
struct ConfigView {
    configured: bool,
    worst_case_wait_secs: u64,
    service: reel_config::ServiceConfig,
    polling: reel_config::PollingConfig,
    search: reel_config::SearchConfig,
}

impl From<&ReelConfig> for ConfigView {
    fn from(config: &ReelConfig) -> Self {
        let mut service = config.service.clone();
        service.api_key = service.masked_api_key();
        Self {
            configured: config.service.is_configured(),
            worst_case_wait_secs: config.polling.worst_case_wait().as_secs(),
            service,
            polling: config.polling.clone(),
            search: config.search.clone(),
        }
    }
}

/// Handle `reel config`.
pub fn handle(config: &ReelConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(&ConfigView::from(config), flags.format)
}
