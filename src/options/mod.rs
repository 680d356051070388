//! Centralized animation options with TOML preset support.
//!
//! All tweakable settings (particle field, wave bands, beacon overlay,
//! frame pacing) are consolidated here. Options serialize to/from TOML so
//! hosts can ship presets next to their pages, and export a JSON schema for
//! settings panels.

mod beacon;
mod driver;
mod particles;
mod waves;

use std::path::Path;

pub use beacon::BeaconOptions;
pub use driver::DriverOptions;
pub use particles::{ParticleOptions, PointerMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use waves::{ChannelOptions, ProximityOptions, WaveOptions, WaveSpec};

use crate::error::TidelightError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[particles]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Particle field parameters.
    pub particles: ParticleOptions,
    /// Wave band parameters.
    pub waves: WaveOptions,
    /// Lighthouse overlay parameters.
    pub beacon: BeaconOptions,
    /// Frame pacing.
    pub driver: DriverOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TidelightError::OptionsParse`] on malformed TOML or
    /// mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, TidelightError> {
        toml::from_str(content)
            .map_err(|e| TidelightError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TidelightError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, TidelightError> {
        let content =
            std::fs::read_to_string(path).map_err(TidelightError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`TidelightError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), TidelightError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TidelightError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TidelightError::Io)?;
        }
        std::fs::write(path, content).map_err(TidelightError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
