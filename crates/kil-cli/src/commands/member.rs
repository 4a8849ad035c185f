use kil_core::entities::SchoolMember;
use kil_core::enums::CharacterTrait;
use kil_core::responses::{MemberProfile, TraitAnswer};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MemberArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kil member`.
pub fn handle(args: &MemberArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let profile = run(args, ctx)?;
    output(&profile, flags.format)
}

pub fn run(args: &MemberArgs, ctx: &AppContext) -> anyhow::Result<MemberProfile> {
    let person = ctx.school.person(&args.name)?;
    let profile = MemberProfile::from_person(person, ctx.rules.calendar_year());

    match args.exhibits.as_deref() {
        Some(raw) => {
            let character_trait: CharacterTrait = parse_enum(raw, "trait")?;
            let answer = TraitAnswer::ask(person.member(), character_trait);
            Ok(profile.with_trait_answer(answer))
        }
        None => Ok(profile),
    }
}

#[cfg(test)]
mod tests {
    use kil_core::school::Role;
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(name: &str, exhibits: Option<&str>) -> MemberArgs {
        MemberArgs {
            name: name.to_string(),
            exhibits: exhibits.map(ToString::to_string),
        }
    }

    #[test]
    fn pupil_profile() {
        let ctx = AppContext::bundled();
        let profile = run(&args("hermione", Some("highly-intelligent")), &ctx).unwrap();
        assert_eq!(profile.role, Role::Pupil);
        assert_eq!(profile.current_year, Some(3));
        assert_eq!(
            profile.exhibits.map(|answer| answer.message),
            Some("Yes, Hermione Jean Granger is highly intelligent!".to_string())
        );
    }

    #[test]
    fn unrecorded_trait_is_reported() {
        let ctx = AppContext::bundled();
        let profile = run(&args("severus", Some("brave")), &ctx).unwrap();
        let answer = profile.exhibits.unwrap();
        assert_eq!(answer.exhibited, None);
    }

    #[test]
    fn invalid_trait_is_an_error() {
        let ctx = AppContext::bundled();
        let err = run(&args("harry", Some("grumpy")), &ctx).unwrap_err();
        assert!(err.to_string().contains("invalid trait 'grumpy'"));
    }
}
