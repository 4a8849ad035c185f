use kil_core::responses::ExamReport;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExamCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kil exam`.
pub fn handle(
    action: &ExamCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = run(action, ctx)?;
    output(&report, flags.format)
}

pub fn run(action: &ExamCommands, ctx: &mut AppContext) -> anyhow::Result<ExamReport> {
    match action {
        ExamCommands::Show { pupil } => Ok(ExamReport::of(ctx.school.pupil(pupil)?)),
        ExamCommands::Set { pupil, parts } => {
            let pupil = ctx.school.pupil_mut(pupil)?;
            let award = pupil.set_exam_result(parts)?;
            Ok(ExamReport {
                award: Some(award),
                ..ExamReport::of(pupil)
            })
        }
        ExamCommands::Clear { pupil } => {
            let pupil = ctx.school.pupil_mut(pupil)?;
            let cleared = pupil.clear_exam_results();
            Ok(ExamReport {
                cleared: Some(cleared),
                ..ExamReport::of(pupil)
            })
        }
    }
}
