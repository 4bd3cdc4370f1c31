//! Snapshot test configuration
//!
//! Settings come from, in order of precedence:
//! - environment variables
//! - a JSON config file
//! - defaults

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory for snapshot files
pub const ENV_SNAPSHOT_DIR: &str = "FIREFLY_SNAPSHOT_DIR";
/// Record snapshots instead of comparing against them
pub const ENV_UPDATE: &str = "FIREFLY_UPDATE_SNAPSHOTS";
/// Write a PNG next to every recorded snapshot
pub const ENV_PNG: &str = "FIREFLY_SNAPSHOT_PNG";
/// Disable ANSI colors in mismatch reports (<https://no-color.org>)
pub const ENV_NO_COLOR: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `<name>.bin` and `<name>.png` files live
    pub snapshot_dir: PathBuf,
    /// Record snapshots instead of comparing
    pub update: bool,
    /// Also write PNG renderings when recording
    pub write_png: bool,
    /// Colorize mismatch reports
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("tests/snapshots"),
            update: false,
            write_png: true,
            color: true,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Defaults overridden by the environment
    pub fn from_env() -> Self {
        Config::default().apply_env()
    }

    /// Override settings from environment variables
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| env::var(key).ok())
    }

    fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(val) = var(ENV_SNAPSHOT_DIR) {
            if !val.is_empty() {
                self.snapshot_dir = PathBuf::from(val);
            }
        }
        if let Some(val) = var(ENV_UPDATE) {
            self.update = is_truthy(&val);
        }
        if let Some(val) = var(ENV_PNG) {
            self.write_png = is_truthy(&val);
        }
        // Any non-empty value disables colors.
        if var(ENV_NO_COLOR).is_some_and(|val| !val.is_empty()) {
            self.color = false;
        }
        self
    }
}

fn is_truthy(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
