use reel_policy::PolicyEngine;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PolicyArgs;
use crate::output;

/// Handle `reel policy`.
pub fn handle(args: &PolicyArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = PolicyEngine::default().evaluate(&args.summary);
    output::output(&outcome, flags.format)
}
