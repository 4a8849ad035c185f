use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CharacterTrait, House, Sex};

/// Recorded character traits. A trait that was never recorded is unknown,
/// which is distinct from a trait recorded as `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct CharacterTraits(BTreeMap<CharacterTrait, bool>);

impl CharacterTraits {
    pub fn set(&mut self, character_trait: CharacterTrait, value: bool) {
        self.0.insert(character_trait, value);
    }

    #[must_use]
    pub fn get(&self, character_trait: CharacterTrait) -> Option<bool> {
        self.0.get(&character_trait).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn labels(&self, value: bool) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|(_, recorded)| **recorded == value)
            .map(|(character_trait, _)| character_trait.label())
            .collect()
    }
}

/// Identity shared by everyone at the school.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub birthyear: i32,
    pub sex: Sex,
    #[serde(default, skip_serializing_if = "CharacterTraits::is_empty")]
    pub traits: CharacterTraits,
}

impl Member {
    #[must_use]
    pub fn new(name: impl Into<String>, birthyear: i32, sex: Sex) -> Self {
        Self {
            name: name.into(),
            birthyear,
            sex,
            traits: CharacterTraits::default(),
        }
    }

    #[must_use]
    pub fn with_trait(mut self, character_trait: CharacterTrait) -> Self {
        self.add_trait(character_trait, true);
        self
    }

    pub fn add_trait(&mut self, character_trait: CharacterTrait, value: bool) {
        self.traits.set(character_trait, value);
    }

    /// Whether the member exhibits `character_trait`; `None` if it was never recorded.
    #[must_use]
    pub fn exhibits_trait(&self, character_trait: CharacterTrait) -> Option<bool> {
        let value = self.traits.get(character_trait);
        match value {
            Some(true) => tracing::debug!(member = %self.name, %character_trait, "trait exhibited"),
            Some(false) => tracing::debug!(member = %self.name, %character_trait, "trait absent"),
            None => tracing::info!(
                "{} does not have a character trait with the name '{character_trait}'",
                self.name
            ),
        }
        value
    }

    /// One-line summary, e.g. "Hermione is highly intelligent, brave but not kind".
    #[must_use]
    pub fn describe_traits(&self) -> String {
        let present = self.traits.labels(true);
        let absent = self.traits.labels(false);

        let mut line = format!("{} is {}", self.name, present.join(", "));
        if !absent.is_empty() {
            line.push_str(&format!(" but not {}", absent.join(", ")));
        }
        line
    }
}

/// Anything that can be addressed as a member of the school.
pub trait SchoolMember {
    fn member(&self) -> &Member;

    /// House affiliation, if the role has one.
    fn house(&self) -> Option<House>;

    fn name(&self) -> &str {
        &self.member().name
    }

    fn says(&self, words: &str) -> String {
        format!("{} says {words}", self.name())
    }
}

impl SchoolMember for Member {
    fn member(&self) -> &Member {
        self
    }

    fn house(&self) -> Option<House> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn says_prefixes_name() {
        let member = Member::new("Bromley Huckabee", 1959, Sex::Male);
        assert_eq!(member.says("hello"), "Bromley Huckabee says hello");
    }

    #[test]
    fn unrecorded_trait_is_unknown() {
        let mut member = Member::new("Hermione", 1979, Sex::Female);
        assert_eq!(member.exhibits_trait(CharacterTrait::Brave), None);

        member.add_trait(CharacterTrait::Brave, false);
        assert_eq!(member.exhibits_trait(CharacterTrait::Brave), Some(false));

        member.add_trait(CharacterTrait::Brave, true);
        assert_eq!(member.exhibits_trait(CharacterTrait::Brave), Some(true));
    }

    #[test]
    fn describe_traits_splits_present_and_absent() {
        let mut member = Member::new("Hermione", 1979, Sex::Female)
            .with_trait(CharacterTrait::HighlyIntelligent);
        member.add_trait(CharacterTrait::Brave, true);
        member.add_trait(CharacterTrait::Cunning, false);

        assert_eq!(
            member.describe_traits(),
            "Hermione is highly intelligent, brave but not cunning"
        );
    }

    #[test]
    fn traits_deserialize_from_snake_case_keys() {
        let json = r#"{"name":"Luna","birthyear":1981,"sex":"female","traits":{"curious":true}}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.traits.get(CharacterTrait::Curious), Some(true));
        assert_eq!(member.house(), None);
    }
}
