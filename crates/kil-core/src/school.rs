//! In-memory school built from a [`Roster`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::eligibility::Eligibility;
use crate::entities::{DeathEater, Ghost, Member, Professor, Pupil, SchoolMember, Spell};
use crate::enums::{ExamScheme, House};
use crate::errors::CoreError;
use crate::outcomes::{CastOutcome, FriendshipOutcome, LearnOutcome};
use crate::roster::Roster;

/// Role a person holds at the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    Professor,
    Ghost,
    Pupil,
}

/// Borrowed view of anyone at the school.
#[derive(Debug, Clone, Copy)]
pub enum Person<'a> {
    Member(&'a Member),
    Professor(&'a Professor),
    Ghost(&'a Ghost),
    Pupil(&'a Pupil),
}

impl Person<'_> {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Member(_) => Role::Member,
            Self::Professor(_) => Role::Professor,
            Self::Ghost(_) => Role::Ghost,
            Self::Pupil(_) => Role::Pupil,
        }
    }
}

impl SchoolMember for Person<'_> {
    fn member(&self) -> &Member {
        match self {
            Self::Member(member) => member,
            Self::Professor(professor) => professor.member(),
            Self::Ghost(ghost) => ghost.member(),
            Self::Pupil(pupil) => pupil.member(),
        }
    }

    fn house(&self) -> Option<House> {
        match self {
            Self::Member(member) => member.house(),
            Self::Professor(professor) => professor.house(),
            Self::Ghost(ghost) => ghost.house(),
            Self::Pupil(pupil) => pupil.house(),
        }
    }
}

/// Owned copy of the parts of a person that befriending needs.
struct Befriended {
    member: Member,
    house: Option<House>,
}

impl SchoolMember for Befriended {
    fn member(&self) -> &Member {
        &self.member
    }

    fn house(&self) -> Option<House> {
        self.house
    }
}

#[derive(Debug, Clone, Default)]
pub struct School {
    members: Vec<Member>,
    professors: Vec<Professor>,
    ghosts: Vec<Ghost>,
    pupils: Vec<Pupil>,
    spells: Vec<Spell>,
    death_eaters: Vec<DeathEater>,
}

/// Names match case-insensitively, either in full or by first name.
fn name_matches(candidate: &str, query: &str) -> bool {
    let query = query.trim();
    candidate.eq_ignore_ascii_case(query)
        || candidate
            .split_whitespace()
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(query))
}

fn not_found(kind: &str, name: &str) -> CoreError {
    CoreError::NotFound {
        kind: kind.to_string(),
        name: name.to_string(),
    }
}

impl School {
    /// Build a school from `roster`, giving pupils without an explicit scheme
    /// `default_scheme`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for duplicate spell names and
    /// propagates spell construction errors.
    pub fn from_roster(roster: Roster, default_scheme: ExamScheme) -> Result<Self, CoreError> {
        let default_scheme = roster.exam_scheme.unwrap_or(default_scheme);

        let mut spells: Vec<Spell> = Vec::with_capacity(roster.spells.len());
        for entry in roster.spells {
            if spells.iter().any(|spell| spell.name == entry.name) {
                return Err(CoreError::Validation(format!(
                    "duplicate spell name '{}'",
                    entry.name
                )));
            }
            spells.push(Spell::try_from(entry)?);
        }

        let pupils = roster
            .pupils
            .into_iter()
            .map(|entry| entry.into_pupil(default_scheme))
            .collect();

        Ok(Self {
            members: roster.members,
            professors: roster.professors,
            ghosts: roster.ghosts,
            pupils,
            spells,
            death_eaters: roster.death_eaters,
        })
    }

    #[must_use]
    pub fn pupils(&self) -> &[Pupil] {
        &self.pupils
    }

    #[must_use]
    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    /// Everyone at the school, members first and pupils last.
    pub fn people(&self) -> impl Iterator<Item = Person<'_>> {
        self.members
            .iter()
            .map(Person::Member)
            .chain(self.professors.iter().map(Person::Professor))
            .chain(self.ghosts.iter().map(Person::Ghost))
            .chain(self.pupils.iter().map(Person::Pupil))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if nobody matches `name`.
    pub fn person(&self, name: &str) -> Result<Person<'_>, CoreError> {
        self.people()
            .find(|person| name_matches(person.name(), name))
            .ok_or_else(|| not_found("person", name))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no pupil matches `name`.
    pub fn pupil(&self, name: &str) -> Result<&Pupil, CoreError> {
        self.pupils
            .iter()
            .find(|pupil| name_matches(&pupil.member.name, name))
            .ok_or_else(|| not_found("pupil", name))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no pupil matches `name`.
    pub fn pupil_mut(&mut self, name: &str) -> Result<&mut Pupil, CoreError> {
        self.pupils
            .iter_mut()
            .find(|pupil| name_matches(&pupil.member.name, name))
            .ok_or_else(|| not_found("pupil", name))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no death eater matches `name`.
    pub fn death_eater(&self, name: &str) -> Result<&DeathEater, CoreError> {
        self.death_eaters
            .iter()
            .find(|eater| name_matches(&eater.name, name))
            .ok_or_else(|| not_found("death eater", name))
    }

    /// Look a spell up by name or incantation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no spell matches `name`.
    pub fn spell(&self, name: &str) -> Result<&Spell, CoreError> {
        let name = name.trim();
        self.spells
            .iter()
            .find(|spell| {
                spell.name.eq_ignore_ascii_case(name) || spell.incantation.eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| not_found("spell", name))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the pupil or spell is unknown.
    pub fn learn(
        &mut self,
        rules: &Eligibility,
        pupil: &str,
        spell: &str,
    ) -> Result<LearnOutcome, CoreError> {
        let spell = self.spell(spell)?.clone();
        let pupil = self.pupil_mut(pupil)?;
        Ok(rules.learn(pupil, &spell))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the pupil or spell is unknown.
    pub fn cast(
        &self,
        rules: &Eligibility,
        pupil: &str,
        spell: &str,
    ) -> Result<CastOutcome, CoreError> {
        Ok(rules.cast(self.pupil(pupil)?, self.spell(spell)?))
    }

    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if the pupil or the person is unknown.
    pub fn befriend(&mut self, pupil: &str, person: &str) -> Result<FriendshipOutcome, CoreError> {
        let friend = {
            let found = self.person(person)?;
            Befriended {
                member: found.member().clone(),
                house: found.house(),
            }
        };
        Ok(self.pupil_mut(pupil)?.befriend(&friend))
    }
}
