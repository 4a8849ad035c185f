//! Outcome types returned by rule-governed operations.
//!
//! Learn, cast, befriend and exam operations never fail because of a rule:
//! they return one of these outcomes, which carries both a machine-readable
//! verdict and the narrative message shown to the user. `kil` serializes them
//! as-is for `--format json`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ExamScheme, House, SpellCategory};

// ---------------------------------------------------------------------------
// Learn
// ---------------------------------------------------------------------------

/// Why a spell was learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LearnBasis {
    /// The pupil's current year reached the spell's minimum year.
    YearRequirementMet,
    /// The pupil was too young but exhibits the override trait.
    TraitOverride,
    /// The category is house-gated and the pupil belongs to that house.
    HouseAffinity,
    /// No rule covers the category and the policy allows it.
    UnruledAllowed,
}

/// Why a spell was not learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LearnDenial {
    TooYoung { current_year: i32, min_year: i32 },
    HouseForbidden { house: Option<House> },
    Unruled { category: SpellCategory },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LearnVerdict {
    Learned { basis: LearnBasis },
    Denied { reason: LearnDenial },
}

/// Result of `learn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LearnOutcome {
    pub pupil: String,
    pub spell: String,
    pub verdict: LearnVerdict,
    pub message: String,
}

impl LearnOutcome {
    #[must_use]
    pub fn learned(pupil: &str, spell: &str, basis: LearnBasis) -> Self {
        Self {
            pupil: pupil.to_string(),
            spell: spell.to_string(),
            verdict: LearnVerdict::Learned { basis },
            message: format!("{pupil} now knows spell {spell}"),
        }
    }

    #[must_use]
    pub fn denied(pupil: &str, spell: &str, reason: LearnDenial) -> Self {
        let message = match reason {
            LearnDenial::TooYoung { .. } => format!("{pupil} is too young to study this spell!"),
            LearnDenial::HouseForbidden { .. } => "How dare you study a hex or curse?!".to_string(),
            LearnDenial::Unruled { category } => {
                format!("{pupil} cannot study {spell}: no rule admits {category} spells")
            }
        };

        Self {
            pupil: pupil.to_string(),
            spell: spell.to_string(),
            verdict: LearnVerdict::Denied { reason },
            message,
        }
    }

    #[must_use]
    pub const fn is_learned(&self) -> bool {
        matches!(self.verdict, LearnVerdict::Learned { .. })
    }
}

// ---------------------------------------------------------------------------
// Cast
// ---------------------------------------------------------------------------

/// Why a cast was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CastRefusal {
    DarkMagic,
    HouseForbidden { house: Option<House> },
    NotStudied,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CastVerdict {
    Cast { incantation: String },
    Refused { reason: CastRefusal },
}

/// Result of `cast`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CastOutcome {
    pub caster: String,
    pub spell: String,
    pub verdict: CastVerdict,
    pub message: String,
}

impl CastOutcome {
    #[must_use]
    pub fn cast(caster: &str, spell: &str, incantation: &str) -> Self {
        Self {
            caster: caster.to_string(),
            spell: spell.to_string(),
            verdict: CastVerdict::Cast {
                incantation: incantation.to_string(),
            },
            message: format!("{caster}: {incantation}!"),
        }
    }

    #[must_use]
    pub fn refused(caster: &str, spell: &str, reason: CastRefusal) -> Self {
        let message = match reason {
            CastRefusal::DarkMagic => {
                "This is dark magic - stay away from performing curses!".to_string()
            }
            CastRefusal::HouseForbidden { .. } => "You shouldn't cast a hex, that's mean!".to_string(),
            CastRefusal::NotStudied => format!(
                "You can't cast the {spell} spell correctly - you have to study it first!"
            ),
        };

        Self {
            caster: caster.to_string(),
            spell: spell.to_string(),
            verdict: CastVerdict::Refused { reason },
            message,
        }
    }

    #[must_use]
    pub const fn is_cast(&self) -> bool {
        matches!(self.verdict, CastVerdict::Cast { .. })
    }
}

// ---------------------------------------------------------------------------
// Friendship
// ---------------------------------------------------------------------------

/// Result of `befriend`. The friendship is always recorded; `caution` is set
/// when the new friend's house warrants a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FriendshipOutcome {
    pub pupil: String,
    pub friend: String,
    pub caution: Option<String>,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Exams
// ---------------------------------------------------------------------------

/// Result of recording a graded exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AwardOutcome {
    pub scheme: ExamScheme,
    pub subject: String,
    pub grade: String,
    pub passed: bool,
    pub message: String,
}

/// Result of clearing an exam record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClearOutcome {
    pub scheme: ExamScheme,
    pub removed: usize,
    pub warning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learn_messages() {
        let ok = LearnOutcome::learned("Harry", "Lumos", LearnBasis::YearRequirementMet);
        assert_eq!(ok.message, "Harry now knows spell Lumos");
        assert!(ok.is_learned());

        let young = LearnOutcome::denied(
            "Harry",
            "Lumos",
            LearnDenial::TooYoung {
                current_year: 3,
                min_year: 5,
            },
        );
        assert_eq!(young.message, "Harry is too young to study this spell!");
        assert!(!young.is_learned());
    }

    #[test]
    fn cast_messages() {
        let ok = CastOutcome::cast("Draco", "stickfast_hex", "Colloshoo");
        assert_eq!(ok.message, "Draco: Colloshoo!");

        let refused = CastOutcome::refused("Harry", "Lumos", CastRefusal::NotStudied);
        assert_eq!(
            refused.message,
            "You can't cast the Lumos spell correctly - you have to study it first!"
        );
    }

    #[test]
    fn verdict_serializes_with_status_tag() {
        let outcome = LearnOutcome::denied(
            "Harry",
            "Colloshoo",
            LearnDenial::HouseForbidden {
                house: Some(House::Gryffindor),
            },
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["verdict"]["status"], "denied");
        assert_eq!(
            json["verdict"]["reason"]["house_forbidden"]["house"],
            "gryffindor"
        );
    }
}
