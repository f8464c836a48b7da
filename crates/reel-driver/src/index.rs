use reel_twelve::AnalysisService;

use crate::{Driver, Sleeper};

impl<S: AnalysisService, Z: Sleeper> Driver<S, Z> {
    /// Look up the configured index by exact name, creating it when absent.
    ///
    /// A failed listing is tolerated and creation is attempted anyway.
    /// Returns `None` only when creation also fails.
    pub async fn resolve_index(&self) -> Option<String> {
        let name = self.settings.index_name.as_str();

        match self.service.list_indexes(name).await {
            Ok(indexes) => {
                if let Some(found) = indexes.into_iter().find(|index| index.name == name) {
                    tracing::debug!(index_id = %found.id, index_name = name, "using existing index");
                    return Some(found.id);
                }
            }
            Err(error) => {
                tracing::warn!(%error, index_name = name, "index listing failed; trying to create it");
            }
        }

        match self.service.create_index(name, &self.settings.models).await {
            Ok(id) => {
                tracing::info!(index_id = %id, index_name = name, "created index");
                Some(id)
            }
            Err(error) => {
                tracing::error!(%error, index_name = name, "index creation failed");
                None
            }
        }
    }
}
