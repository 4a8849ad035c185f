//! Learn/cast/exam rules exercised across houses, years and categories.

use kil_core::eligibility::{Eligibility, OVERRIDE_TRAIT};
use kil_core::entities::{Member, Pupil, Spell};
use kil_core::enums::{ExamScheme, House, Sex, SpellCategory, UnruledPolicy};
use kil_core::errors::CoreError;
use kil_core::outcomes::{CastRefusal, CastVerdict, LearnBasis, LearnDenial, LearnVerdict};
use pretty_assertions::assert_eq;
use rstest::rstest;

const HOUSES: [House; 4] = [
    House::Gryffindor,
    House::Hufflepuff,
    House::Ravenclaw,
    House::Slytherin,
];

fn pupil(house: House, start_year: i32) -> Pupil {
    Pupil::new(
        Member::new("Test Pupil", start_year - 11, Sex::Female),
        house,
        start_year,
        ExamScheme::Owl,
    )
}

fn spell(category: SpellCategory) -> Spell {
    Spell::new("test spell", "Testus", "Does test things", category)
}

#[rstest]
#[case(1, 5, false)]
#[case(4, 5, false)]
#[case(5, 5, true)]
#[case(7, 5, true)]
#[case(1, 1, true)]
fn min_year_gate_follows_current_year(
    #[case] current_year: i32,
    #[case] min_year: i32,
    #[case] expected: bool,
) {
    let rules = Eligibility::new(2000, UnruledPolicy::Deny);
    for category in [SpellCategory::Charm, SpellCategory::Hex] {
        for house in HOUSES {
            let mut learner = pupil(house, 2000 - current_year + 1);
            let target = spell(category).with_min_year(min_year).unwrap();

            let outcome = rules.learn(&mut learner, &target);
            assert_eq!(outcome.is_learned(), expected, "{category} {house}");
            assert_eq!(learner.knows("test spell"), expected);
        }
    }
}

#[rstest]
#[case(1, 5)]
#[case(3, 5)]
#[case(6, 7)]
fn override_trait_bypasses_any_min_year(#[case] current_year: i32, #[case] min_year: i32) {
    let rules = Eligibility::new(2000, UnruledPolicy::Deny);
    let mut learner = pupil(House::Gryffindor, 2000 - current_year + 1);
    learner.member.add_trait(OVERRIDE_TRAIT, true);

    let outcome = rules.learn(&mut learner, &spell(SpellCategory::Charm).with_min_year(min_year).unwrap());
    assert_eq!(
        outcome.verdict,
        LearnVerdict::Learned {
            basis: LearnBasis::TraitOverride
        }
    );
}

#[rstest]
#[case(SpellCategory::Hex)]
#[case(SpellCategory::Curse)]
fn dark_spells_are_learned_only_in_slytherin(#[case] category: SpellCategory) {
    let rules = Eligibility::new(1993, UnruledPolicy::Allow);
    for house in HOUSES {
        let mut learner = pupil(house, 1991);
        let outcome = rules.learn(&mut learner, &spell(category));
        assert_eq!(outcome.is_learned(), house == House::Slytherin, "{house}");
        if house != House::Slytherin {
            assert_eq!(outcome.message, "How dare you study a hex or curse?!");
            assert_eq!(
                outcome.verdict,
                LearnVerdict::Denied {
                    reason: LearnDenial::HouseForbidden { house: Some(house) }
                }
            );
        }
    }
}

#[test]
fn curses_never_cast() {
    let rules = Eligibility::new(1993, UnruledPolicy::Deny);
    for house in HOUSES {
        let mut caster = pupil(house, 1985);
        caster.member.add_trait(OVERRIDE_TRAIT, true);
        let curse = spell(SpellCategory::Curse);
        rules.learn(&mut caster, &curse);

        let outcome = rules.cast(&caster, &curse);
        assert_eq!(
            outcome.verdict,
            CastVerdict::Refused {
                reason: CastRefusal::DarkMagic
            }
        );
    }
}

#[test]
fn hexes_cast_only_in_slytherin() {
    let rules = Eligibility::new(1993, UnruledPolicy::Deny);
    let hex = spell(SpellCategory::Hex);
    for house in HOUSES {
        let caster = pupil(house, 1991);
        assert_eq!(rules.cast(&caster, &hex).is_cast(), house == House::Slytherin);
    }
}

#[rstest]
#[case(SpellCategory::Charm)]
#[case(SpellCategory::Transfiguration)]
#[case(SpellCategory::Jinx)]
#[case(SpellCategory::CounterSpell)]
#[case(SpellCategory::HealingSpell)]
fn light_spells_cast_once_studied(#[case] category: SpellCategory) {
    let rules = Eligibility::new(1993, UnruledPolicy::Allow);
    let mut caster = pupil(House::Hufflepuff, 1991);
    let target = spell(category);

    let before = rules.cast(&caster, &target);
    assert_eq!(
        before.verdict,
        CastVerdict::Refused {
            reason: CastRefusal::NotStudied
        }
    );

    assert!(rules.learn(&mut caster, &target).is_learned());
    let after = rules.cast(&caster, &target);
    assert_eq!(after.message, "Test Pupil: Testus!");
}

#[test]
fn third_year_scenario() {
    let rules = Eligibility::new(1993, UnruledPolicy::Deny);
    let rictum = Spell::new(
        "tickling_charm",
        "Rictumsempra",
        "Causes victim to buckle with laughter",
        SpellCategory::Charm,
    )
    .with_min_year(5)
    .unwrap();

    let mut harry = pupil(House::Gryffindor, 1991);
    assert_eq!(harry.current_year(1993), 3);
    assert!(!rules.learn(&mut harry, &rictum).is_learned());

    let mut hermione = pupil(House::Gryffindor, 1991);
    hermione.member.add_trait(OVERRIDE_TRAIT, true);
    assert!(rules.learn(&mut hermione, &rictum).is_learned());
}

#[test]
fn exam_record_contract() {
    let mut harry = pupil(House::Gryffindor, 1991);

    let err = harry.set_exam_result(&["Potions"]).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument(_)));

    harry.set_exam_result(&["Potions", "O"]).unwrap();
    harry.set_exam_result(&["Charms", "T"]).unwrap();
    assert_eq!(harry.exams().passed("Potions"), Some(true));
    assert_eq!(harry.exams().passed("Charms"), Some(false));

    let cleared = harry.clear_exam_results();
    assert_eq!(cleared.removed, 12);
    assert!(harry.exams().results().is_empty());
}
