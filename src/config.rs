//! Optional settings file (rorschach.yaml).
//!
//! Every field is optional; anything left out falls back to the command line
//! defaults. Explicit command line flags always win over the file.
//!
//! ```yaml
//! size: 12
//! scale: 10
//! mode: colored
//! max-color: 220
//! rainbow: true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RorschachError, Result};
use crate::types::ColourMode;

/// Settings file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILENAME: &str = "rorschach.yaml";

/// Defaults loaded from a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    pub size: Option<u32>,
    pub scale: Option<u32>,
    pub mode: Option<ColourMode>,
    pub out: Option<PathBuf>,
    pub min_color: Option<i32>,
    pub max_color: Option<i32>,
    pub rainbow: Option<bool>,
    pub colorbgs: Option<bool>,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RorschachError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_yaml::from_str(content).map_err(|e| RorschachError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        settings.check()?;
        Ok(settings)
    }

    /// Find and load settings for a run.
    ///
    /// An explicit path must exist. Without one, `rorschach.yaml` in `dir`
    /// is used if present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            return Self::load(path).map(Some);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            Self::load(&default_path).map(Some)
        } else {
            Ok(None)
        }
    }

    fn check(&self) -> Result<()> {
        for (name, value) in [("size", self.size), ("scale", self.scale)] {
            if value == Some(0) {
                return Err(RorschachError::Config {
                    message: format!("{} must be at least 1", name),
                    help: None,
                });
            }
        }
        Ok(())
    }
}
