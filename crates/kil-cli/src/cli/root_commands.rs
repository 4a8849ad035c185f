use clap::{Args, Subcommand};

use crate::cli::subcommands::ExamCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the demonstration scenario against the loaded roster.
    Demo,
    /// Let a pupil study one or more spells, in order.
    Learn(LearnArgs),
    /// Let a pupil cast a spell.
    Cast(CastArgs),
    /// Exam records.
    Exam {
        #[command(subcommand)]
        action: ExamCommands,
    },
    /// Add people to a pupil's friend list, in order.
    Befriend(BefriendArgs),
    /// Show a member of the school.
    Member(MemberArgs),
    /// List the spell catalogue.
    Spells(SpellsArgs),
    /// Print the roster file JSON Schema.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct LearnArgs {
    /// Pupil name (full or first name)
    pub pupil: String,
    /// Spell names or incantations
    #[arg(required = true)]
    pub spells: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CastArgs {
    /// Pupil name (full or first name)
    pub pupil: String,
    /// Spell name or incantation
    pub spell: String,
    /// Spells to study before casting (repeatable)
    #[arg(long = "study")]
    pub study: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BefriendArgs {
    /// Pupil name (full or first name)
    pub pupil: String,
    /// Anyone at the school
    #[arg(required = true)]
    pub people: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MemberArgs {
    /// Member name (full or first name)
    pub name: String,
    /// Ask whether the member exhibits a character trait (e.g. highly-intelligent)
    #[arg(long)]
    pub exhibits: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SpellsArgs {
    /// Only list one category (e.g. charm, counter-spell)
    #[arg(long)]
    pub category: Option<String>,
}
