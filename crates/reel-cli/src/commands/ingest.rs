use reel_config::ReelConfig;
use reel_core::VIDEO_ID_NOT_AVAILABLE;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::IngestArgs;
use crate::output;
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct IngestResponse<'a> {
    video_url: &'a str,
    video_id: String,
    dimension: usize,
    zero_vector: bool,
}

/// Handle `reel ingest`.
pub async fn handle(
    args: &IngestArgs,
    config: &ReelConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let driver = bootstrap::driver(config)?;

    let spinner = Spinner::start("indexing video");
    let outcome = driver.index_and_embed(&args.url).await;
    spinner.finish_clear();

    let response = IngestResponse {
        video_url: &args.url,
        zero_vector: outcome.is_zero(),
        dimension: outcome.embedding.len(),
        video_id: outcome
            .video_id
            .unwrap_or_else(|| VIDEO_ID_NOT_AVAILABLE.to_string()),
    };
    output::output(&response, flags.format)
}
