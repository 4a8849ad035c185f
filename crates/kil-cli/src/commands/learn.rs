use kil_core::outcomes::LearnOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LearnArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kil learn`.
pub fn handle(args: &LearnArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcomes = run(args, ctx)?;
    output(&outcomes, flags.format)
}

/// Study each spell in order; later spells see what earlier ones taught.
pub fn run(args: &LearnArgs, ctx: &mut AppContext) -> anyhow::Result<Vec<LearnOutcome>> {
    args.spells
        .iter()
        .map(|spell| {
            ctx.school
                .learn(&ctx.rules, &args.pupil, spell)
                .map_err(anyhow::Error::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use kil_core::outcomes::{LearnDenial, LearnVerdict};
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(pupil: &str, spells: &[&str]) -> LearnArgs {
        LearnArgs {
            pupil: pupil.to_string(),
            spells: spells.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn third_year_cannot_study_fifth_year_charm() {
        let mut ctx = AppContext::bundled();
        let outcomes = run(&args("harry", &["Wingardium Leviosa", "Rictumsempra"]), &mut ctx)
            .expect("learn should run");

        assert_eq!(outcomes[0].message, "Harry James Potter now knows spell Wingardium Leviosa");
        assert_eq!(
            outcomes[1].verdict,
            LearnVerdict::Denied {
                reason: LearnDenial::TooYoung {
                    current_year: 3,
                    min_year: 5,
                }
            }
        );
        assert!(ctx.school.pupil("harry").unwrap().knows("Wingardium Leviosa"));
    }

    #[test]
    fn unknown_spell_is_an_error() {
        let mut ctx = AppContext::bundled();
        let err = run(&args("harry", &["Expelliarmus"]), &mut ctx).unwrap_err();
        assert!(err.to_string().contains("Expelliarmus"));
    }
}
