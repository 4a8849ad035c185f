//! Fixed-subject exam records.
//!
//! A record starts with every subject of its [`ExamScheme`] marked as not
//! passed. Grades only ever flip a subject to passed; subjects are never added,
//! and [`ExamRecord::clear`] drops all of them at once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ExamScheme;
use crate::errors::CoreError;
use crate::outcomes::{AwardOutcome, ClearOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExamResult {
    pub subject: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExamRecord {
    scheme: ExamScheme,
    results: Vec<ExamResult>,
}

impl ExamRecord {
    /// Fresh record with every subject of `scheme` marked as not passed.
    #[must_use]
    pub fn new(scheme: ExamScheme) -> Self {
        let results = scheme
            .subjects()
            .iter()
            .map(|subject| ExamResult {
                subject: (*subject).to_string(),
                passed: false,
            })
            .collect();
        Self { scheme, results }
    }

    #[must_use]
    pub const fn scheme(&self) -> ExamScheme {
        self.scheme
    }

    #[must_use]
    pub fn results(&self) -> &[ExamResult] {
        &self.results
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Pass state of `subject`, or `None` if the record does not track it.
    #[must_use]
    pub fn passed(&self, subject: &str) -> Option<bool> {
        self.results
            .iter()
            .find(|result| result.subject == subject)
            .map(|result| result.passed)
    }

    /// Record a graded exam from loosely-shaped input.
    ///
    /// `parts` must be exactly `[subject, grade]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] when `parts` does not hold exactly
    /// two items, and whatever [`ExamRecord::award`] returns otherwise.
    pub fn set<S: AsRef<str>>(&mut self, parts: &[S]) -> Result<AwardOutcome, CoreError> {
        match parts {
            [subject, grade] => self.award(subject.as_ref(), grade.as_ref()),
            _ => Err(CoreError::InvalidArgument(format!(
                "pass exactly two items: subject and grade (got {})",
                parts.len()
            ))),
        }
    }

    /// Record a graded exam for `subject`.
    ///
    /// A passing grade marks the subject as passed. A failing or unknown grade
    /// leaves the record unchanged and only reports that nothing was awarded,
    /// whether or not the record tracks `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownSubject`] when a passing grade names a
    /// subject the record does not track (including after [`ExamRecord::clear`]).
    pub fn award(&mut self, subject: &str, grade: &str) -> Result<AwardOutcome, CoreError> {
        let scheme = self.scheme;
        let passed = scheme.passes(grade);
        tracing::debug!(subject, grade, passed, "exam graded");

        if !passed {
            return Ok(AwardOutcome {
                scheme,
                subject: subject.to_string(),
                grade: grade.to_string(),
                passed,
                message: format!(
                    "The exam was not passed so no {} was awarded!",
                    scheme.award_name()
                ),
            });
        }

        let entry = self
            .results
            .iter_mut()
            .find(|result| result.subject == subject)
            .ok_or_else(|| CoreError::UnknownSubject {
                subject: subject.to_string(),
            })?;
        entry.passed = true;

        Ok(AwardOutcome {
            scheme,
            subject: subject.to_string(),
            grade: grade.to_string(),
            passed,
            message: format!("{} awarded in {subject}", scheme.award_name()),
        })
    }

    /// Drop every subject from the record. There is no way back.
    pub fn clear(&mut self) -> ClearOutcome {
        let award = self.scheme.award_name();
        let warning = format!(
            "Caution, you are deleting this students' {award}s! You should only do that \
             if she/he dropped out of school without passing any exam!"
        );
        tracing::warn!(scheme = %self.scheme, subjects = self.results.len(), "clearing exam record");

        let removed = self.results.len();
        self.results.clear();

        ClearOutcome {
            scheme: self.scheme,
            removed,
            warning,
        }
    }
}
