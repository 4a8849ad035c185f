use kil_core::responses::FriendsReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BefriendArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kil befriend`.
pub fn handle(
    args: &BefriendArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = run(args, ctx)?;
    output(&report, flags.format)
}

pub fn run(args: &BefriendArgs, ctx: &mut AppContext) -> anyhow::Result<FriendsReport> {
    let outcomes = args
        .people
        .iter()
        .map(|person| ctx.school.befriend(&args.pupil, person))
        .collect::<Result<Vec<_>, _>>()?;
    let summary = ctx.school.pupil(&args.pupil)?.friends_summary();
    Ok(FriendsReport { outcomes, summary })
}
