//! Houses, spell categories, character traits and exam schemes for Kilmere.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Spell categories carry the rule table that the eligibility engine dispatches
//! on, so adding a category means extending exactly one `match` per gate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// House
// ---------------------------------------------------------------------------

/// School house of a pupil, professor or ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum House {
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}

impl House {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gryffindor => "Gryffindor",
            Self::Hufflepuff => "Hufflepuff",
            Self::Ravenclaw => "Ravenclaw",
            Self::Slytherin => "Slytherin",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CharacterTrait
// ---------------------------------------------------------------------------

/// Named character trait that can be recorded on any member.
///
/// `HighlyIntelligent` is the override trait: it lets a pupil learn a spell
/// before reaching the spell's minimum year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CharacterTrait {
    HighlyIntelligent,
    Brave,
    Loyal,
    Cunning,
    Ambitious,
    Curious,
    Kind,
}

impl CharacterTrait {
    /// Human-readable label used in narrative messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyIntelligent => "highly intelligent",
            Self::Brave => "brave",
            Self::Loyal => "loyal",
            Self::Cunning => "cunning",
            Self::Ambitious => "ambitious",
            Self::Curious => "curious",
            Self::Kind => "kind",
        }
    }
}

impl fmt::Display for CharacterTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SpellCategory
// ---------------------------------------------------------------------------

/// Closed classification of a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpellCategory {
    Charm,
    Transfiguration,
    Jinx,
    Hex,
    Curse,
    CounterSpell,
    HealingSpell,
}

/// Restriction applied when a pupil studies a spell without a minimum year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnGate {
    /// Only members of the given house may study the category.
    HouseOnly(House),
    /// No rule covers the category; see [`UnruledPolicy`].
    Unruled,
}

/// Restriction applied when a pupil casts a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastGate {
    /// Nobody may cast the category.
    Forbidden,
    /// Only members of the given house may cast the category.
    HouseOnly(House),
    /// The caster must have learned the spell first.
    KnownSpell,
}

impl SpellCategory {
    pub const ALL: [Self; 7] = [
        Self::Charm,
        Self::Transfiguration,
        Self::Jinx,
        Self::Hex,
        Self::Curse,
        Self::CounterSpell,
        Self::HealingSpell,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Charm => "charm",
            Self::Transfiguration => "transfiguration",
            Self::Jinx => "jinx",
            Self::Hex => "hex",
            Self::Curse => "curse",
            Self::CounterSpell => "counter_spell",
            Self::HealingSpell => "healing_spell",
        }
    }

    /// Title-case label used in narrative messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Charm => "Charm",
            Self::Transfiguration => "Transfiguration",
            Self::Jinx => "Jinx",
            Self::Hex => "Hex",
            Self::Curse => "Curse",
            Self::CounterSpell => "Counter-Spell",
            Self::HealingSpell => "Healing-Spell",
        }
    }

    /// What sets spells of this category apart from the others.
    #[must_use]
    pub const fn defining_feature(self) -> &'static str {
        match self {
            Self::Charm => {
                "Alteration of the object's inherent qualities, \
                 that is, its behaviour and capabilities"
            }
            Self::Transfiguration => "Alteration of the object's form or appearance",
            Self::Jinx => {
                "Minor dark magic - a spell whose effects are irritating but amusing, \
                 almost playful and of minor inconvenience to the target"
            }
            Self::Hex => {
                "Medium dark magic - Affects an object in a negative manner. \
                 Major inconvenience to the target."
            }
            Self::Curse => {
                "Worst kind of dark magic - \
                 Intended to affect an object in a strongly negative manner."
            }
            Self::CounterSpell => "Inhibits the effects of another spell",
            Self::HealingSpell => "Improves the condition of a living object",
        }
    }

    /// Whether spells of this category may declare a minimum year.
    #[must_use]
    pub const fn carries_min_year(self) -> bool {
        matches!(self, Self::Charm | Self::Hex)
    }

    #[must_use]
    pub const fn learn_gate(self) -> LearnGate {
        match self {
            Self::Hex | Self::Curse => LearnGate::HouseOnly(House::Slytherin),
            Self::Charm
            | Self::Transfiguration
            | Self::Jinx
            | Self::CounterSpell
            | Self::HealingSpell => LearnGate::Unruled,
        }
    }

    #[must_use]
    pub const fn cast_gate(self) -> CastGate {
        match self {
            Self::Curse => CastGate::Forbidden,
            Self::Hex => CastGate::HouseOnly(House::Slytherin),
            Self::Charm
            | Self::Transfiguration
            | Self::Jinx
            | Self::CounterSpell
            | Self::HealingSpell => CastGate::KnownSpell,
        }
    }
}

impl fmt::Display for SpellCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// UnruledPolicy
// ---------------------------------------------------------------------------

/// How the learn operation treats categories with no minimum year and no
/// house gate (e.g. a plain Transfiguration).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnruledPolicy {
    Allow,
    #[default]
    Deny,
}

impl UnruledPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for UnruledPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExamScheme
// ---------------------------------------------------------------------------

/// Exam scheme a pupil's record follows. Each scheme fixes the subject list
/// and the grade lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExamScheme {
    /// Ordinary Wizarding Levels.
    #[default]
    Owl,
    /// Elementary Level of Magic.
    Elm,
}

const OWL_SUBJECTS: &[&str] = &[
    "Study of Ancient Runes",
    "Arithmancy",
    "Astronomy",
    "Care of Magical Creatures",
    "Charms",
    "Defence Against the Dark Arts",
    "Divination",
    "Herbology",
    "History of Magic",
    "Muggle Studies",
    "Potions",
    "Transfiguration",
];

const ELM_SUBJECTS: &[&str] = &[
    "Critical Thinking",
    "Self-Defense Against Fresh Fruit",
    "Broomstick Flying",
    "Magical Theory",
    "Foreign Magical Systems",
    "Charms",
    "Defence Against Dark Magic",
    "History of Magic",
    "Potions",
    "Transfiguration",
];

impl ExamScheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owl => "owl",
            Self::Elm => "elm",
        }
    }

    /// Name of the qualification awarded for a passed exam.
    #[must_use]
    pub const fn award_name(self) -> &'static str {
        match self {
            Self::Owl => "OWL",
            Self::Elm => "ELM",
        }
    }

    /// Full subject list, in the order a fresh record presents them.
    #[must_use]
    pub const fn subjects(self) -> &'static [&'static str] {
        match self {
            Self::Owl => OWL_SUBJECTS,
            Self::Elm => ELM_SUBJECTS,
        }
    }

    /// Map a grade through the scheme's pass/fail table.
    ///
    /// Unrecognized grades fail. `P` is listed as both "Passed" and "Poor" in
    /// the OWL table; the later "Poor" entry wins, so `P` fails.
    #[must_use]
    pub fn passes(self, grade: &str) -> bool {
        match self {
            Self::Owl => matches!(grade, "O" | "Ordinary" | "Passed" | "A" | "Acceptable"),
            Self::Elm => matches!(
                grade,
                "E" | "Excellent" | "G" | "Good" | "A" | "Acceptable"
            ),
        }
    }
}

impl fmt::Display for ExamScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
