use kil_core::enums::SpellCategory;
use kil_core::responses::SpellSummary;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SpellsArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kil spells`.
pub fn handle(args: &SpellsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spells = run(args, ctx)?;
    output(&spells, flags.format)
}

pub fn run(args: &SpellsArgs, ctx: &AppContext) -> anyhow::Result<Vec<SpellSummary>> {
    let category = args
        .category
        .as_deref()
        .map(|raw| parse_enum::<SpellCategory>(raw, "category"))
        .transpose()?;

    Ok(ctx
        .school
        .spells()
        .iter()
        .filter(|spell| category.is_none_or(|category| spell.category == category))
        .map(SpellSummary::from)
        .collect())
}
