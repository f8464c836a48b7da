use anyhow::Context;
use reel_config::ReelConfig;
use reel_driver::Driver;
use reel_twelve::TwelveClient;

use crate::cli::GlobalFlags;

/// Load `.env`, layer configuration sources, and validate the result.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ReelConfig> {
    dotenvy::dotenv().ok();

    let config = match &flags.config {
        Some(path) => ReelConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ReelConfig::load().context("failed to load configuration")?,
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Driver bound to the live service.
pub fn driver(config: &ReelConfig) -> anyhow::Result<Driver<TwelveClient>> {
    let client = TwelveClient::from_config(&config.service)
        .context("failed to build the video-intelligence client")?;
    Ok(Driver::new(client, config))
}

pub fn warn_unconfigured(config: &ReelConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ReelConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if config.service.is_configured() {
        return warnings;
    }

    warnings.push(
        "No API key configured (REEL_SERVICE__API_KEY); every video will be summarized from the fallback catalog."
            .to_string(),
    );

    if env_keys.iter().any(|key| key == "TWELVE_LABS_API_KEY") {
        warnings.push(
            "TWELVE_LABS_API_KEY is set but reel reads REEL_SERVICE__API_KEY.".to_string(),
        );
    }

    if env_keys
        .iter()
        .any(|key| key.starts_with("REEL_SERVICE_") && !key.starts_with("REEL_SERVICE__"))
    {
        warnings.push(
            "REEL_SERVICE* env vars exist without a double underscore. Use REEL_SERVICE__API_KEY."
                .to_string(),
        );
    }

    warnings
}
