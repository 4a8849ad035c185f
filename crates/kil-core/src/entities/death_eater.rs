use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::spell::Spell;
use crate::outcomes::CastOutcome;

/// A dark wizard outside the school. Not bound by any casting rule.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeathEater {
    pub name: String,
    pub birthyear: i32,
}

impl DeathEater {
    #[must_use]
    pub fn new(name: impl Into<String>, birthyear: i32) -> Self {
        Self {
            name: name.into(),
            birthyear,
        }
    }

    /// Every death eater follows the same leader.
    #[must_use]
    pub fn leader() -> Self {
        Self::new("Voldemort", 1926)
    }

    /// Cast `spell` whatever its category. Nothing is learned or checked.
    #[must_use]
    pub fn cast(&self, spell: &Spell) -> CastOutcome {
        tracing::debug!(caster = %self.name, spell = %spell.name, category = %spell.category, "unchecked cast");
        CastOutcome::cast(&self.name, &spell.name, &spell.incantation)
    }
}
