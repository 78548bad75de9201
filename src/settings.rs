//! Persisted CLI settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// User configuration, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Folder where notes are created.
    pub path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is a real error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save settings as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}
