use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ExamCommands {
    /// Show a pupil's exam record.
    Show {
        /// Pupil name (full or first name)
        pupil: String,
    },
    /// Record a graded exam: SUBJECT GRADE.
    Set {
        /// Pupil name (full or first name)
        pupil: String,
        /// Exactly two items: subject and grade
        parts: Vec<String>,
    },
    /// Delete every exam result of a pupil.
    Clear {
        /// Pupil name (full or first name)
        pupil: String,
    },
}
