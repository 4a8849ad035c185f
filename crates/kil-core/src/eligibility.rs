//! Spell learn/cast eligibility.
//!
//! Both operations dispatch on the category gates defined in
//! [`crate::enums::SpellCategory`]:
//!
//! ```text
//! learn: min year set?  yes → year reached? → learned
//!                             override trait? → learned
//!                             otherwise       → too young
//!                       no  → HouseOnly(h)   → learned iff pupil in h
//!                             Unruled        → UnruledPolicy
//!
//! cast:  Forbidden     → refused
//!        HouseOnly(h)  → cast iff caster in h
//!        KnownSpell    → cast iff the spell name was learned
//! ```
//!
//! Known spells are stored by name, and the cast check compares names, so a
//! spell that was not learned always ends in `NotStudied`.

use crate::entities::{Pupil, Spell};
use crate::enums::{CastGate, CharacterTrait, LearnGate, UnruledPolicy};
use crate::outcomes::{CastOutcome, CastRefusal, LearnBasis, LearnDenial, LearnOutcome};

/// Trait that lets a pupil study a spell before reaching its minimum year.
pub const OVERRIDE_TRAIT: CharacterTrait = CharacterTrait::HighlyIntelligent;

/// Rule engine for a given calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    calendar_year: i32,
    unruled: UnruledPolicy,
}

impl Eligibility {
    #[must_use]
    pub const fn new(calendar_year: i32, unruled: UnruledPolicy) -> Self {
        Self {
            calendar_year,
            unruled,
        }
    }

    #[must_use]
    pub const fn calendar_year(&self) -> i32 {
        self.calendar_year
    }

    #[must_use]
    pub const fn unruled_policy(&self) -> UnruledPolicy {
        self.unruled
    }

    /// Let `pupil` study `spell`. On success the spell name joins the
    /// pupil's known spells; a denial leaves the pupil untouched.
    pub fn learn(&self, pupil: &mut Pupil, spell: &Spell) -> LearnOutcome {
        let outcome = self.judge_learn(pupil, spell);
        if outcome.is_learned() {
            pupil.record_spell(&spell.name);
        }
        tracing::debug!(
            pupil = %pupil.member.name,
            spell = %spell.name,
            category = %spell.category,
            learned = outcome.is_learned(),
            "learn"
        );
        outcome
    }

    fn judge_learn(&self, pupil: &Pupil, spell: &Spell) -> LearnOutcome {
        let name = pupil.member.name.as_str();

        if let Some(min_year) = spell.min_year() {
            let current_year = pupil.current_year(self.calendar_year);
            if current_year >= min_year {
                return LearnOutcome::learned(name, &spell.name, LearnBasis::YearRequirementMet);
            }
            if pupil.member.exhibits_trait(OVERRIDE_TRAIT) == Some(true) {
                return LearnOutcome::learned(name, &spell.name, LearnBasis::TraitOverride);
            }
            return LearnOutcome::denied(
                name,
                &spell.name,
                LearnDenial::TooYoung {
                    current_year,
                    min_year,
                },
            );
        }

        match spell.category.learn_gate() {
            LearnGate::HouseOnly(house) if pupil.house == Some(house) => {
                LearnOutcome::learned(name, &spell.name, LearnBasis::HouseAffinity)
            }
            LearnGate::HouseOnly(_) => LearnOutcome::denied(
                name,
                &spell.name,
                LearnDenial::HouseForbidden { house: pupil.house },
            ),
            LearnGate::Unruled => match self.unruled {
                UnruledPolicy::Allow => {
                    LearnOutcome::learned(name, &spell.name, LearnBasis::UnruledAllowed)
                }
                UnruledPolicy::Deny => LearnOutcome::denied(
                    name,
                    &spell.name,
                    LearnDenial::Unruled {
                        category: spell.category,
                    },
                ),
            },
        }
    }

    /// Let `pupil` cast `spell`. Casting never changes what the pupil knows.
    pub fn cast(&self, pupil: &Pupil, spell: &Spell) -> CastOutcome {
        let name = pupil.member.name.as_str();

        let outcome = match spell.category.cast_gate() {
            CastGate::Forbidden => CastOutcome::refused(name, &spell.name, CastRefusal::DarkMagic),
            CastGate::HouseOnly(house) if pupil.house == Some(house) => {
                CastOutcome::cast(name, &spell.name, &spell.incantation)
            }
            CastGate::HouseOnly(_) => CastOutcome::refused(
                name,
                &spell.name,
                CastRefusal::HouseForbidden { house: pupil.house },
            ),
            CastGate::KnownSpell if pupil.knows(&spell.name) => {
                CastOutcome::cast(name, &spell.name, &spell.incantation)
            }
            CastGate::KnownSpell => CastOutcome::refused(name, &spell.name, CastRefusal::NotStudied),
        };

        tracing::debug!(
            caster = name,
            spell = %spell.name,
            category = %spell.category,
            cast = outcome.is_cast(),
            "cast"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::Member;
    use crate::enums::{ExamScheme, House, Sex, SpellCategory};
    use crate::outcomes::LearnVerdict;

    const NOW: i32 = 1993;

    fn engine() -> Eligibility {
        Eligibility::new(NOW, UnruledPolicy::Deny)
    }

    fn pupil(name: &str, house: House) -> Pupil {
        Pupil::new(Member::new(name, 1980, Sex::Male), house, 1991, ExamScheme::Owl)
    }

    fn rictum() -> Spell {
        Spell::new(
            "tickling_charm",
            "Rictumsempra",
            "Causes victim to buckle with laughter",
            SpellCategory::Charm,
        )
        .with_min_year(5)
        .unwrap()
    }

    #[test]
    fn too_young_without_override() {
        let mut harry = pupil("Harry", House::Gryffindor);
        let outcome = engine().learn(&mut harry, &rictum());

        assert_eq!(
            outcome.verdict,
            LearnVerdict::Denied {
                reason: LearnDenial::TooYoung {
                    current_year: 3,
                    min_year: 5
                }
            }
        );
        assert!(!harry.knows("tickling_charm"));
    }

    #[test]
    fn override_trait_bypasses_min_year() {
        let mut hermione = pupil("Hermione", House::Gryffindor);
        hermione.member.add_trait(OVERRIDE_TRAIT, true);

        let outcome = engine().learn(&mut hermione, &rictum());
        assert_eq!(
            outcome.verdict,
            LearnVerdict::Learned {
                basis: LearnBasis::TraitOverride
            }
        );
        assert!(hermione.knows("tickling_charm"));
    }

    #[test]
    fn override_trait_recorded_false_does_not_help() {
        let mut ron = pupil("Ron", House::Gryffindor);
        ron.member.add_trait(OVERRIDE_TRAIT, false);
        assert!(!engine().learn(&mut ron, &rictum()).is_learned());
    }

    #[test]
    fn min_year_takes_precedence_over_house_gate() {
        let hex = Spell::new("stickfast_hex", "Colloshoo", "Sticky shoes", SpellCategory::Hex)
            .with_min_year(2)
            .unwrap();
        let mut harry = pupil("Harry", House::Gryffindor);

        let outcome = engine().learn(&mut harry, &hex);
        assert_eq!(
            outcome.verdict,
            LearnVerdict::Learned {
                basis: LearnBasis::YearRequirementMet
            }
        );
    }

    #[test]
    fn unruled_policy_decides_plain_categories() {
        let avifors = Spell::new("Avifors", "Avifors", "Turns into birds", SpellCategory::Transfiguration);

        let mut harry = pupil("Harry", House::Gryffindor);
        let denied = engine().learn(&mut harry, &avifors);
        assert!(!denied.is_learned());
        assert!(!harry.knows("Avifors"));

        let permissive = Eligibility::new(NOW, UnruledPolicy::Allow);
        let learned = permissive.learn(&mut harry, &avifors);
        assert_eq!(
            learned.verdict,
            LearnVerdict::Learned {
                basis: LearnBasis::UnruledAllowed
            }
        );
        assert!(harry.knows("Avifors"));
    }

    #[test]
    fn casting_never_changes_known_spells() {
        let wing_lev = Spell::new(
            "Wingardium Leviosa",
            "Wingardium Leviosa",
            "Makes objects fly",
            SpellCategory::Charm,
        )
        .with_min_year(1)
        .unwrap();
        let mut harry = pupil("Harry", House::Gryffindor);

        let refused = engine().cast(&harry, &wing_lev);
        assert!(!refused.is_cast());
        assert!(!harry.knows("Wingardium Leviosa"));

        engine().learn(&mut harry, &wing_lev);
        let before: Vec<String> = harry.known_spells().map(str::to_string).collect();
        let cast = engine().cast(&harry, &wing_lev);
        assert_eq!(cast.message, "Harry: Wingardium Leviosa!");
        let after: Vec<String> = harry.known_spells().map(str::to_string).collect();
        assert_eq!(before, after);
    }
}
