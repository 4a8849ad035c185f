use kil_core::entities::{DeathEater, SchoolMember, Spellcraft};
use kil_core::enums::CharacterTrait;
use kil_core::responses::{DemoStep, TraitAnswer};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `kil demo`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let steps = run(ctx)?;
    output(&steps, flags.format)
}

/// Replay the demonstration scenario. Expects the characters of the bundled roster.
pub fn run(ctx: &mut AppContext) -> anyhow::Result<Vec<DemoStep>> {
    Ok(vec![
        traits(ctx)?,
        learning(ctx)?,
        dark_arts(ctx)?,
        casting(ctx)?,
        catalogue(ctx)?,
        friends(ctx)?,
        exams(ctx)?,
        death_eaters(ctx)?,
    ])
}

fn step(title: &str, lines: Vec<String>) -> DemoStep {
    DemoStep {
        title: title.to_string(),
        lines,
    }
}

fn traits(ctx: &AppContext) -> anyhow::Result<DemoStep> {
    let hermione = ctx.school.pupil("hermione")?;
    let dumbledore = ctx.school.person("albus")?;
    Ok(step(
        "Character traits",
        vec![
            hermione.says("I have read about this!"),
            TraitAnswer::ask(&hermione.member, CharacterTrait::HighlyIntelligent).message,
            TraitAnswer::ask(dumbledore.member(), CharacterTrait::Brave).message,
        ],
    ))
}

fn learning(ctx: &mut AppContext) -> anyhow::Result<DemoStep> {
    let attempts = [
        ("harry", "Wingardium Leviosa"),
        ("harry", "tickling_charm"),
        ("hermione", "tickling_charm"),
    ];
    Ok(step("Learning spells", study(ctx, &attempts)?))
}

fn dark_arts(ctx: &mut AppContext) -> anyhow::Result<DemoStep> {
    let attempts = [
        ("harry", "stickfast_hex"),
        ("draco", "stickfast_hex"),
        ("harry", "Cruciatus Curse"),
        ("draco", "Cruciatus Curse"),
    ];
    Ok(step("Hexes and curses", study(ctx, &attempts)?))
}

fn study(ctx: &mut AppContext, attempts: &[(&str, &str)]) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(attempts.len());
    for (pupil, spell) in attempts {
        lines.push(ctx.school.learn(&ctx.rules, pupil, spell)?.message);
    }
    Ok(lines)
}

fn casting(ctx: &AppContext) -> anyhow::Result<DemoStep> {
    let attempts = [
        ("harry", "Wingardium Leviosa"),
        ("ron", "Wingardium Leviosa"),
        ("harry", "stickfast_hex"),
        ("draco", "stickfast_hex"),
        ("draco", "Cruciatus Curse"),
    ];
    let mut lines = Vec::with_capacity(attempts.len());
    for (pupil, spell) in attempts {
        lines.push(ctx.school.cast(&ctx.rules, pupil, spell)?.message);
    }
    Ok(step("Casting spells", lines))
}

fn catalogue(ctx: &AppContext) -> anyhow::Result<DemoStep> {
    let stuporus = ctx.school.spell("The Stuporus Ratiato spell")?;
    let avifors = ctx.school.spell("Avifors")?;
    let mut lines = Vec::new();
    if let Some(effect) = stuporus.cast() {
        lines.push(effect);
    }
    lines.push(format!("{}: {}", stuporus.category, stuporus.defining_feature()));
    lines.push(format!("{}: {}", avifors.category, avifors.defining_feature()));
    Ok(step("Spell catalogue", lines))
}

fn friends(ctx: &mut AppContext) -> anyhow::Result<DemoStep> {
    let mut lines = Vec::new();
    for person in ["Bromley Huckabee", "luke", "adrien", "draco"] {
        let outcome = ctx.school.befriend("lissy", person)?;
        lines.extend(outcome.caution);
        lines.push(outcome.message);
    }
    lines.push(ctx.school.pupil("lissy")?.friends_summary());
    Ok(step("Friends", lines))
}

fn exams(ctx: &mut AppContext) -> anyhow::Result<DemoStep> {
    let mut lines = Vec::new();
    let harry = ctx.school.pupil_mut("harry")?;
    lines.push(harry.set_exam_result(&["Potions", "O"])?.message);
    lines.push(harry.set_exam_result(&["Charms", "P"])?.message);

    let luke = ctx.school.pupil_mut("luke")?;
    lines.push(luke.set_exam_result(&["Broomstick Flying", "E"])?.message);

    let adrien = ctx.school.pupil_mut("adrien")?;
    lines.push(adrien.clear_exam_results().warning);
    Ok(step("Exams", lines))
}

fn death_eaters(ctx: &AppContext) -> anyhow::Result<DemoStep> {
    let bellatrix = ctx.school.death_eater("bellatrix")?;
    let crucio = ctx.school.spell("Cruciatus Curse")?;
    Ok(step(
        "Death eaters",
        vec![
            format!("{} follows {}", bellatrix.name, DeathEater::leader().name),
            bellatrix.cast(crucio).message,
        ],
    ))
}
