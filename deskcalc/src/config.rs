//! Frontend configuration.
//!
//! Options for how the terminal presents the calculator. Engine behavior
//! itself is fixed and not configurable; only the presentation is.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation options for the terminal frontend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Column width both display lines are right-aligned to.
    pub display_width: usize,

    /// Prompt printed before each input line.
    pub prompt: String,

    /// Print a note when a line contained keys with no calculator meaning.
    pub report_ignored: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            display_width: 24,
            prompt: "> ".to_string(),
            report_ignored: true,
        }
    }
}

impl DeskConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }
}
