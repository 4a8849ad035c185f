use kil_core::responses::CastReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CastArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kil cast`.
pub fn handle(args: &CastArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = run(args, ctx)?;
    output(&report, flags.format)
}

/// Study every `--study` spell, then cast.
pub fn run(args: &CastArgs, ctx: &mut AppContext) -> anyhow::Result<CastReport> {
    let studied = args
        .study
        .iter()
        .map(|spell| ctx.school.learn(&ctx.rules, &args.pupil, spell))
        .collect::<Result<Vec<_>, _>>()?;
    let cast = ctx.school.cast(&ctx.rules, &args.pupil, &args.spell)?;
    Ok(CastReport { studied, cast })
}
