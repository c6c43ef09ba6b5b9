//! Configuration management for the sketchbook.
//!
//! Handles loading configuration from TOML files, with support for
//! user-defined sketch registry entries layered over the built-in defaults.

use crate::error::{Result, SketchbookError};
use crate::registry::{Sketch, SketchRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure for the sketchbook.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Additional sketch registry entries, keyed by sketch name.
    #[serde(default)]
    pub sketches: HashMap<String, Sketch>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sketchbook")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error: the built-in registry is enough to
    /// run the bundled sketch.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SketchbookError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            SketchbookError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Builds the effective registry: the built-in defaults with this
    /// config's entries layered on top. Entries win over defaults when
    /// names collide.
    pub fn registry(&self) -> SketchRegistry {
        let mut registry = SketchRegistry::with_defaults();
        registry.merge(self.sketches.clone());
        registry
    }
}
