//! Project configuration stored in `.arcviz/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR: &str = ".arcviz";
pub const CONFIG_FILE: &str = "config.json";

/// Defaults applied when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,
    /// Architecture description to read.
    pub file: PathBuf,
    /// Image format to request.
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            file: PathBuf::from("arc.yaml"),
            format: "png".to_string(),
        }
    }
}

impl Config {
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the configuration under `root`, falling back to defaults when
    /// there is none.
    pub fn load(root: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path_in(root);
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Loads the configuration of the current directory.
    pub fn current() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load(&std::env::current_dir()?)
    }
}
