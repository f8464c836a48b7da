use reel_config::ReelConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &ReelConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Audit(args) => commands::audit::handle(&args, config, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, config, flags).await,
        Commands::Ingest(args) => commands::ingest::handle(&args, config, flags).await,
        Commands::Config => commands::config::handle(config, flags),
        Commands::Policy(_) | Commands::Schema => {
            unreachable!("policy/schema are pre-dispatched in main")
        }
    }
}
