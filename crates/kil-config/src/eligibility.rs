//! Eligibility engine configuration.

use kil_core::enums::UnruledPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EligibilityConfig {
    /// Whether spells with no minimum year and no house gate can be learned.
    #[serde(default)]
    pub unruled_categories: UnruledPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denies_unruled_categories_by_default() {
        let config = EligibilityConfig::default();
        assert_eq!(config.unruled_categories, UnruledPolicy::Deny);
    }
}
