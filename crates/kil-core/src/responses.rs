//! CLI response types returned by `kil` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `kil member`, `kil spells`, `kil exam`, `kil befriend`, `kil cast` and
//! `kil demo`. Single-operation commands (`kil learn`) print the outcome types
//! from [`crate::outcomes`] directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Member, Pet, Pupil, SchoolMember, Spell, Spellcraft};
use crate::enums::{CharacterTrait, ExamScheme, House, Sex, SpellCategory};
use crate::exams::ExamResult;
use crate::outcomes::{AwardOutcome, CastOutcome, ClearOutcome, FriendshipOutcome, LearnOutcome};
use crate::school::{Person, Role};

/// Answer to "does this member exhibit a trait?".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TraitAnswer {
    pub character_trait: CharacterTrait,
    /// `None` when the trait was never recorded for the member.
    pub exhibited: Option<bool>,
    pub message: String,
}

impl TraitAnswer {
    #[must_use]
    pub fn ask(member: &Member, character_trait: CharacterTrait) -> Self {
        let exhibited = member.exhibits_trait(character_trait);
        let name = &member.name;
        let message = match exhibited {
            Some(true) => format!("Yes, {name} is {character_trait}!"),
            Some(false) => format!("No, {name} is not {character_trait}!"),
            None => format!("{name} does not have a character trait with the name '{character_trait}'"),
        };
        Self {
            character_trait,
            exhibited,
            message,
        }
    }
}

/// Response from `kil member`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MemberProfile {
    pub name: String,
    pub role: Role,
    pub birthyear: i32,
    pub sex: Sex,
    pub house: Option<House>,
    pub traits: Option<String>,
    pub exhibits: Option<TraitAnswer>,
    pub subject: Option<String>,
    pub department: Option<String>,
    pub year_of_death: Option<i32>,
    pub start_year: Option<i32>,
    pub current_year: Option<i32>,
    pub pet: Option<Pet>,
    pub known_spells: Vec<String>,
    pub friends: Vec<String>,
}

impl MemberProfile {
    #[must_use]
    pub fn from_person(person: Person<'_>, calendar_year: i32) -> Self {
        let member = person.member();
        let mut profile = Self {
            name: member.name.clone(),
            role: person.role(),
            birthyear: member.birthyear,
            sex: member.sex,
            house: person.house(),
            traits: (!member.traits.is_empty()).then(|| member.describe_traits()),
            exhibits: None,
            subject: None,
            department: None,
            year_of_death: None,
            start_year: None,
            current_year: None,
            pet: None,
            known_spells: Vec::new(),
            friends: Vec::new(),
        };

        match person {
            Person::Member(_) => {}
            Person::Professor(professor) => {
                profile.subject = Some(professor.subject.clone());
                profile.department.clone_from(&professor.department);
            }
            Person::Ghost(ghost) => profile.year_of_death = Some(ghost.year_of_death),
            Person::Pupil(pupil) => profile.fill_pupil(pupil, calendar_year),
        }
        profile
    }

    fn fill_pupil(&mut self, pupil: &Pupil, calendar_year: i32) {
        self.start_year = Some(pupil.start_year);
        self.current_year = Some(pupil.current_year(calendar_year));
        self.pet.clone_from(&pupil.pet);
        self.known_spells = pupil.known_spells().map(str::to_string).collect();
        self.friends = pupil
            .friends()
            .iter()
            .map(|friend| friend.name.clone())
            .collect();
    }

    #[must_use]
    pub fn with_trait_answer(mut self, answer: TraitAnswer) -> Self {
        self.exhibits = Some(answer);
        self
    }
}

/// One row of `kil spells`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpellSummary {
    pub name: String,
    pub incantation: String,
    pub category: SpellCategory,
    pub effect: String,
    pub min_year: Option<i32>,
    pub difficulty: Option<String>,
    pub defining_feature: String,
    /// Effect of casting the spell outside any pupil context.
    pub standalone_cast: Option<String>,
}

impl From<&Spell> for SpellSummary {
    fn from(spell: &Spell) -> Self {
        Self {
            name: spell.name.clone(),
            incantation: spell.incantation.clone(),
            category: spell.category,
            effect: spell.effect.clone(),
            min_year: spell.min_year(),
            difficulty: spell.difficulty.clone(),
            defining_feature: spell.defining_feature().to_string(),
            standalone_cast: spell.cast(),
        }
    }
}

/// Response from `kil exam show|set|clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExamReport {
    pub pupil: String,
    pub scheme: ExamScheme,
    pub results: Vec<ExamResult>,
    pub award: Option<AwardOutcome>,
    pub cleared: Option<ClearOutcome>,
}

impl ExamReport {
    /// Snapshot of `pupil`'s record with no operation attached.
    #[must_use]
    pub fn of(pupil: &Pupil) -> Self {
        Self {
            pupil: pupil.member.name.clone(),
            scheme: pupil.exams().scheme(),
            results: pupil.exams().results().to_vec(),
            award: None,
            cleared: None,
        }
    }
}

/// Response from `kil befriend`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FriendsReport {
    pub outcomes: Vec<FriendshipOutcome>,
    pub summary: String,
}

/// Response from `kil cast`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CastReport {
    pub studied: Vec<LearnOutcome>,
    pub cast: CastOutcome,
}

/// One titled step of `kil demo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DemoStep {
    pub title: String,
    pub lines: Vec<String>,
}
