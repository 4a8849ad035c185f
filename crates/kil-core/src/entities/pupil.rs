use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::member::{Member, SchoolMember};
use crate::enums::{ExamScheme, House};
use crate::errors::CoreError;
use crate::exams::ExamRecord;
use crate::outcomes::{AwardOutcome, ClearOutcome, FriendshipOutcome};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pet {
    pub name: String,
    pub species: String,
}

/// Someone a pupil has befriended, captured at the time of befriending.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Acquaintance {
    pub name: String,
    pub house: Option<House>,
}

/// A pupil enrolled at the school.
///
/// The known-spell set only grows through
/// [`Eligibility::learn`](crate::eligibility::Eligibility::learn). Exam results
/// only change through [`Pupil::set_exam_result`] and
/// [`Pupil::clear_exam_results`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pupil {
    #[serde(flatten)]
    pub member: Member,
    pub house: Option<House>,
    pub start_year: i32,
    pub pet: Option<Pet>,
    known_spells: BTreeSet<String>,
    exams: ExamRecord,
    friends: Vec<Acquaintance>,
}

impl Pupil {
    #[must_use]
    pub fn new(
        member: Member,
        house: impl Into<Option<House>>,
        start_year: i32,
        scheme: ExamScheme,
    ) -> Self {
        Self {
            member,
            house: house.into(),
            start_year,
            pet: None,
            known_spells: BTreeSet::new(),
            exams: ExamRecord::new(scheme),
            friends: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pet(mut self, name: impl Into<String>, species: impl Into<String>) -> Self {
        self.pet = Some(Pet {
            name: name.into(),
            species: species.into(),
        });
        self
    }

    /// School year the pupil is in during `calendar_year`. The start year
    /// counts as year one. Saturates instead of overflowing.
    #[must_use]
    pub const fn current_year(&self, calendar_year: i32) -> i32 {
        calendar_year.saturating_sub(self.start_year).saturating_add(1)
    }

    #[must_use]
    pub fn knows(&self, spell_name: &str) -> bool {
        self.known_spells.contains(spell_name)
    }

    pub fn known_spells(&self) -> impl Iterator<Item = &str> {
        self.known_spells.iter().map(String::as_str)
    }

    pub(crate) fn record_spell(&mut self, spell_name: &str) {
        self.known_spells.insert(spell_name.to_string());
    }

    #[must_use]
    pub const fn exams(&self) -> &ExamRecord {
        &self.exams
    }

    /// Record a graded exam given as `[subject, grade]`.
    ///
    /// # Errors
    ///
    /// See [`ExamRecord::set`].
    pub fn set_exam_result<S: AsRef<str>>(&mut self, parts: &[S]) -> Result<AwardOutcome, CoreError> {
        self.exams.set(parts)
    }

    /// Wipe every exam result. Only meant for pupils who left without passing anything.
    pub fn clear_exam_results(&mut self) -> ClearOutcome {
        self.exams.clear()
    }

    /// Add `person` to the friend list. Always succeeds; befriending a
    /// Slytherin from another house attaches a caution.
    pub fn befriend<P: SchoolMember + ?Sized>(&mut self, person: &P) -> FriendshipOutcome {
        let friend_house = person.house();
        let caution = (self.house != Some(House::Slytherin) && friend_house == Some(House::Slytherin))
            .then(|| "Are you sure you want to be friends with someone from Slytherin?".to_string());

        if let Some(caution) = &caution {
            tracing::info!(pupil = %self.member.name, friend = person.name(), "{caution}");
        }

        self.friends.push(Acquaintance {
            name: person.name().to_string(),
            house: friend_house,
        });

        FriendshipOutcome {
            pupil: self.member.name.clone(),
            friend: person.name().to_string(),
            caution,
            message: format!("{} is now your friend!", person.name()),
        }
    }

    #[must_use]
    pub fn friends(&self) -> &[Acquaintance] {
        &self.friends
    }

    #[must_use]
    pub fn friends_summary(&self) -> String {
        let names: Vec<&str> = self.friends.iter().map(|friend| friend.name.as_str()).collect();
        format!("{}'s current friends are: {names:?}", self.member.name)
    }
}

impl SchoolMember for Pupil {
    fn member(&self) -> &Member {
        &self.member
    }

    fn house(&self) -> Option<House> {
        self.house
    }
}
