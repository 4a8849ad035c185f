use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SpellCategory;
use crate::errors::CoreError;

/// Behaviour every spell category must provide.
pub trait Spellcraft {
    fn category(&self) -> SpellCategory;

    /// Standalone effect of casting the spell outside any pupil context, if
    /// the category has one.
    fn cast(&self) -> Option<String>;

    fn defining_feature(&self) -> &'static str {
        self.category().defining_feature()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Spell {
    pub name: String,
    pub incantation: String,
    pub effect: String,
    pub category: SpellCategory,
    pub difficulty: Option<String>,
    min_year: Option<i32>,
}

impl Spell {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        incantation: impl Into<String>,
        effect: impl Into<String>,
        category: SpellCategory,
    ) -> Self {
        Self {
            name: name.into(),
            incantation: incantation.into(),
            effect: effect.into(),
            category,
            difficulty: None,
            min_year: None,
        }
    }

    /// Require pupils to reach `year` before studying the spell.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MinYearNotSupported`] for categories that never
    /// carry a minimum year (everything but charms and hexes).
    pub fn with_min_year(mut self, year: i32) -> Result<Self, CoreError> {
        if !self.category.carries_min_year() {
            return Err(CoreError::MinYearNotSupported {
                category: self.category,
            });
        }
        if year < 1 {
            return Err(CoreError::Validation(format!(
                "minimum year must be at least 1, got {year}"
            )));
        }
        self.min_year = Some(year);
        Ok(self)
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    #[must_use]
    pub const fn min_year(&self) -> Option<i32> {
        self.min_year
    }
}

impl Spellcraft for Spell {
    fn category(&self) -> SpellCategory {
        self.category
    }

    fn cast(&self) -> Option<String> {
        match self.category {
            SpellCategory::Charm => Some(format!("{}!", self.incantation)),
            SpellCategory::Transfiguration
            | SpellCategory::Jinx
            | SpellCategory::Hex
            | SpellCategory::Curse
            | SpellCategory::CounterSpell
            | SpellCategory::HealingSpell => None,
        }
    }
}
