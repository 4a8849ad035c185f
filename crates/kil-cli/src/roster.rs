//! Roster loading: the bundled demonstration roster or a TOML file on disk.

use std::path::Path;

use anyhow::Context;
use kil_core::roster::Roster;

/// Roster compiled into the binary.
pub const BUNDLED_ROSTER: &str = include_str!("../rosters/demo.toml");

/// Load the roster at `path`, or the bundled roster when `path` is `None`.
pub fn load(path: Option<&Path>) -> anyhow::Result<Roster> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read roster file {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loading roster file");
            parse(&text).with_context(|| format!("invalid roster file {}", path.display()))
        }
        None => parse(BUNDLED_ROSTER).context("bundled roster is invalid"),
    }
}

pub fn parse(text: &str) -> anyhow::Result<Roster> {
    toml::from_str(text).map_err(anyhow::Error::from)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use kil_core::enums::{CharacterTrait, ExamScheme, House};

    use super::*;

    #[test]
    fn bundled_roster_parses() {
        let roster = load(None).expect("bundled roster should parse");
        assert_eq!(roster.calendar_year, Some(1993));
        assert_eq!(roster.pupils.len(), 7);
        assert_eq!(roster.death_eaters.len(), 2);

        let hermione = roster
            .pupils
            .iter()
            .find(|pupil| pupil.member.name.starts_with("Hermione"))
            .expect("hermione is on the roster");
        assert_eq!(
            hermione.member.traits.get(CharacterTrait::HighlyIntelligent),
            Some(true)
        );

        let luke = roster
            .pupils
            .iter()
            .find(|pupil| pupil.member.name == "Luke Bery")
            .expect("luke is on the roster");
        assert_eq!(luke.house, None);
        assert_eq!(luke.exam_scheme, Some(ExamScheme::Elm));
    }

    #[test]
    fn loads_roster_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[pupils]]
name = "Ginny Weasley"
birthyear = 1981
sex = "female"
house = "gryffindor"
start_year = 1992
"#
        )
        .unwrap();

        let roster = load(Some(file.path())).expect("roster should load");
        assert_eq!(roster.pupils[0].house, Some(House::Gryffindor));
        assert!(roster.spells.is_empty());
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read roster file"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = parse(
            r#"
[[spells]]
name = "Expelliarmus"
incantation = "Expelliarmus"
effect = "Disarms"
category = "disarming"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}
