//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Roster file to load. Empty means the roster bundled with `kil`.
    #[serde(default)]
    pub roster_path: String,
}

impl GeneralConfig {
    #[must_use]
    pub fn roster_path(&self) -> Option<PathBuf> {
        let trimmed = self.roster_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
