//! Roster file types.
//!
//! A roster describes a school population and its spell catalogue. It is the
//! data-driven replacement for hard-coded character presets: `kil` parses a
//! roster from TOML and turns it into a [`School`](crate::school::School).
//! `kil schema` publishes the JSON Schema generated from [`Roster`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{DeathEater, Ghost, Member, Pet, Professor, Pupil, Spell};
use crate::enums::{ExamScheme, House, SpellCategory};
use crate::errors::CoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Roster {
    /// Calendar year the roster is set in. Overrides the configured year.
    pub calendar_year: Option<i32>,
    /// Exam scheme for pupils that do not name one. Overrides the configured scheme.
    pub exam_scheme: Option<ExamScheme>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub professors: Vec<Professor>,
    #[serde(default)]
    pub ghosts: Vec<Ghost>,
    #[serde(default)]
    pub pupils: Vec<PupilEntry>,
    #[serde(default)]
    pub spells: Vec<SpellEntry>,
    #[serde(default)]
    pub death_eaters: Vec<DeathEater>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PupilEntry {
    #[serde(flatten)]
    pub member: Member,
    pub house: Option<House>,
    pub start_year: i32,
    pub pet: Option<Pet>,
    pub exam_scheme: Option<ExamScheme>,
}

impl PupilEntry {
    #[must_use]
    pub fn into_pupil(self, default_scheme: ExamScheme) -> Pupil {
        let scheme = self.exam_scheme.unwrap_or(default_scheme);
        let mut pupil = Pupil::new(self.member, self.house, self.start_year, scheme);
        pupil.pet = self.pet;
        pupil
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpellEntry {
    pub name: String,
    pub incantation: String,
    pub effect: String,
    pub category: SpellCategory,
    pub difficulty: Option<String>,
    pub min_year: Option<i32>,
}

impl TryFrom<SpellEntry> for Spell {
    type Error = CoreError;

    fn try_from(entry: SpellEntry) -> Result<Self, Self::Error> {
        let mut spell = Self::new(entry.name, entry.incantation, entry.effect, entry.category);
        if let Some(difficulty) = entry.difficulty {
            spell = spell.with_difficulty(difficulty);
        }
        match entry.min_year {
            Some(year) => spell.with_min_year(year),
            None => Ok(spell),
        }
    }
}
