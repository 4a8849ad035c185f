use kil_core::roster::Roster;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `kil schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&roster_schema()?, flags.format)
}

/// JSON Schema for roster files.
pub fn roster_schema() -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(schemars::schema_for!(Roster))?)
}
