use std::path::PathBuf;

use anyhow::Context;
use kil_config::KilConfig;
use kil_core::eligibility::Eligibility;
use kil_core::school::School;

use crate::cli::GlobalFlags;
use crate::roster;

/// Shared application state initialized once at startup.
pub struct AppContext {
    pub school: School,
    pub rules: Eligibility,
}

impl AppContext {
    /// Load the roster named by the flags or config and build the rule engine.
    pub fn init(config: &KilConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let roster_path = flags
            .roster
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.general.roster_path());
        let roster = roster::load(roster_path.as_deref())?;

        let calendar_year =
            resolve_calendar_year(flags.year, roster.calendar_year, config.school.calendar_year);
        let school = School::from_roster(roster, config.school.exam_scheme)
            .context("failed to build school from roster")?;
        let rules = Eligibility::new(calendar_year, config.eligibility.unruled_categories);

        tracing::debug!(
            calendar_year,
            unruled = %rules.unruled_policy(),
            pupils = school.pupils().len(),
            spells = school.spells().len(),
            "kilmere context ready"
        );

        Ok(Self {
            school,
            rules,
        })
    }

    /// Context over the bundled roster with default configuration.
    #[cfg(test)]
    pub fn bundled() -> Self {
        let flags = GlobalFlags {
            format: crate::cli::OutputFormat::Text,
            quiet: false,
            verbose: false,
            roster: None,
            year: None,
        };
        Self::init(&KilConfig::default(), &flags).expect("bundled roster should load")
    }
}

/// `--year` beats the roster's year, which beats the configured year.
#[must_use]
fn resolve_calendar_year(flag: Option<i32>, roster: Option<i32>, configured: i32) -> i32 {
    flag.or(roster).unwrap_or(configured)
}
