use reel_core::ComplianceReport;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

/// Handle `reel schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(ComplianceReport);
    // A schema has no sensible tabular form.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        other => other,
    };
    output::output(&schema, format)
}
