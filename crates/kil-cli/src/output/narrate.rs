use kil_core::outcomes::{CastOutcome, FriendshipOutcome, LearnOutcome};
use kil_core::responses::{
    CastReport, DemoStep, ExamReport, FriendsReport, MemberProfile, SpellSummary,
};
use serde_json::Value;

/// Human-readable lines printed for `--format text`.
pub trait Narrate {
    fn narrate(&self) -> Vec<String>;
}

impl<T: Narrate> Narrate for Vec<T> {
    fn narrate(&self) -> Vec<String> {
        self.iter().flat_map(Narrate::narrate).collect()
    }
}

impl Narrate for LearnOutcome {
    fn narrate(&self) -> Vec<String> {
        vec![self.message.clone()]
    }
}

impl Narrate for CastOutcome {
    fn narrate(&self) -> Vec<String> {
        vec![self.message.clone()]
    }
}

impl Narrate for FriendshipOutcome {
    fn narrate(&self) -> Vec<String> {
        self.caution
            .iter()
            .cloned()
            .chain(std::iter::once(self.message.clone()))
            .collect()
    }
}

impl Narrate for FriendsReport {
    fn narrate(&self) -> Vec<String> {
        let mut lines = self.outcomes.narrate();
        lines.push(self.summary.clone());
        lines
    }
}

impl Narrate for CastReport {
    fn narrate(&self) -> Vec<String> {
        let mut lines = self.studied.narrate();
        lines.extend(self.cast.narrate());
        lines
    }
}

impl Narrate for ExamReport {
    fn narrate(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(cleared) = &self.cleared {
            lines.push(cleared.warning.clone());
        }
        if let Some(award) = &self.award {
            lines.push(award.message.clone());
        }

        let award_name = self.scheme.award_name();
        if self.results.is_empty() {
            lines.push(format!("{} has no {award_name} results", self.pupil));
        } else {
            lines.push(format!("{}'s {award_name} results:", self.pupil));
            for result in &self.results {
                let status = if result.passed { "passed" } else { "not passed" };
                lines.push(format!("  {}: {status}", result.subject));
            }
        }
        lines
    }
}

impl Narrate for MemberProfile {
    fn narrate(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{} ({:?}, born {}, {})",
            self.name, self.role, self.birthyear, self.sex
        )];
        if let Some(house) = self.house {
            lines.push(format!("House: {house}"));
        }
        if let Some(subject) = &self.subject {
            lines.push(format!("Teaches: {subject}"));
        }
        if let Some(department) = &self.department {
            lines.push(format!("Department: {department}"));
        }
        if let Some(year) = self.year_of_death {
            lines.push(format!("Died: {year}"));
        }
        if let (Some(start), Some(current)) = (self.start_year, self.current_year) {
            lines.push(format!("Started {start}, now in year {current}"));
        }
        if let Some(pet) = &self.pet {
            lines.push(format!("Pet: {} the {}", pet.name, pet.species));
        }
        if let Some(traits) = &self.traits {
            lines.push(traits.clone());
        }
        if !self.known_spells.is_empty() {
            lines.push(format!("Knows: {}", self.known_spells.join(", ")));
        }
        if !self.friends.is_empty() {
            lines.push(format!("Friends: {}", self.friends.join(", ")));
        }
        if let Some(answer) = &self.exhibits {
            lines.push(answer.message.clone());
        }
        lines
    }
}

impl Narrate for SpellSummary {
    fn narrate(&self) -> Vec<String> {
        let mut line = format!(
            "{} [{}] {}: {}",
            self.name, self.category, self.incantation, self.effect
        );
        if let Some(min_year) = self.min_year {
            line.push_str(&format!(" (from year {min_year})"));
        }
        vec![line]
    }
}

impl Narrate for DemoStep {
    fn narrate(&self) -> Vec<String> {
        let mut lines = vec![format!("== {} ==", self.title)];
        lines.extend(self.lines.iter().cloned());
        lines.push(String::new());
        lines
    }
}

impl Narrate for Value {
    fn narrate(&self) -> Vec<String> {
        vec![serde_json::to_string_pretty(self).unwrap_or_default()]
    }
}
