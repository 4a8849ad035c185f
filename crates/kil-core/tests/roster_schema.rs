//! Serde roundtrip and JsonSchema validation tests for roster and outcome types.

use kil_core::entities::{DeathEater, Member};
use kil_core::enums::*;
use kil_core::outcomes::*;
use kil_core::roster::{PupilEntry, Roster, SpellEntry};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    roster_roundtrip,
    Roster,
    Roster {
        calendar_year: Some(1993),
        exam_scheme: Some(ExamScheme::Owl),
        members: vec![Member::new("Albus Dumbledore", 1881, Sex::Male)],
        professors: Vec::new(),
        ghosts: Vec::new(),
        pupils: vec![PupilEntry {
            member: Member::new("Hermione Jean Granger", 1979, Sex::Female)
                .with_trait(CharacterTrait::HighlyIntelligent),
            house: Some(House::Gryffindor),
            start_year: 1991,
            pet: None,
            exam_scheme: None,
        }],
        spells: vec![SpellEntry {
            name: "Lumos".into(),
            incantation: "Lumos".into(),
            effect: "Illuminates the wand tip".into(),
            category: SpellCategory::Charm,
            difficulty: Some("simple".into()),
            min_year: Some(5),
        }],
        death_eaters: vec![DeathEater::new("Lucius Malfoy", 1954)],
    }
);

roundtrip_and_validate!(
    learn_outcome_roundtrip,
    LearnOutcome,
    LearnOutcome::denied(
        "Harry",
        "tickling_charm",
        LearnDenial::TooYoung {
            current_year: 3,
            min_year: 5,
        },
    )
);

roundtrip_and_validate!(
    cast_outcome_roundtrip,
    CastOutcome,
    CastOutcome::cast("Draco", "stickfast_hex", "Colloshoo")
);

#[test]
fn schema_rejects_unknown_category() {
    let schema = serde_json::to_value(schema_for!(Roster)).unwrap();
    let instance = serde_json::json!({
        "spells": [{
            "name": "Expelliarmus",
            "incantation": "Expelliarmus",
            "effect": "Disarms",
            "category": "disarming_charm"
        }]
    });
    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
