//! Cross-cutting error types for Kilmere.
//!
//! Only malformed input is an error. Rule violations (a pupil too young for a
//! spell, a hex cast outside Slytherin) are reported through the outcome types
//! in [`crate::outcomes`] instead.

use thiserror::Error;

use crate::enums::SpellCategory;

/// Errors that can be raised by any Kilmere crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An operation received arguments of the wrong shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An exam result was recorded for a subject the record does not track.
    #[error("Unknown exam subject: {subject}")]
    UnknownSubject { subject: String },

    /// A minimum year was attached to a category that never carries one.
    #[error("{category} spells do not carry a minimum year")]
    MinYearNotSupported { category: SpellCategory },

    /// Lookup by name returned no result.
    #[error("{kind} not found: {name}")]
    NotFound { kind: String, name: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
