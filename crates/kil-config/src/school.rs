//! School calendar and exam configuration.

use chrono::Datelike;
use kil_core::enums::ExamScheme;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Calendar year used when nothing else pins one down.
fn default_calendar_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchoolConfig {
    /// Calendar year used to work out each pupil's current school year.
    #[serde(default = "default_calendar_year")]
    pub calendar_year: i32,

    /// Exam scheme for pupils whose roster entry does not name one.
    #[serde(default)]
    pub exam_scheme: ExamScheme,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            calendar_year: default_calendar_year(),
            exam_scheme: ExamScheme::default(),
        }
    }
}

impl SchoolConfig {
    /// Reject calendar years before the common era.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calendar_year < 1 {
            return Err(ConfigError::InvalidValue {
                field: "school.calendar_year".to_string(),
                reason: format!("must be positive, got {}", self.calendar_year),
            });
        }
        Ok(())
    }
}
