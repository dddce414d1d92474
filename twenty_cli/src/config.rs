//! Game configuration loaded from TOML.

use anyhow::{Context, Result};
use question_core::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "twenty.toml";

/// Where persisted game data lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Ontology JSON file (noun -> record).
    pub ontology: PathBuf,
    /// Directory holding one `<bucket>.txt` noun list per bucket.
    pub buckets_dir: PathBuf,
    /// One noun per line, cross-checked by `inspect`.
    pub noun_universe: Option<PathBuf>,
    /// One property per line, cross-checked by `inspect`.
    pub property_universe: Option<PathBuf>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            ontology: PathBuf::from("data/ontology.json"),
            buckets_dir: PathBuf::from("data/buckets"),
            noun_universe: None,
            property_universe: None,
        }
    }
}

/// Complete configuration of the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub engine: EngineConfig,
    pub data: DataPaths,
    /// Fixed RNG seed for reproducible guesses.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content).context("invalid game configuration")?;
        config
            .engine
            .validate()
            .map_err(anyhow::Error::msg)
            .context("invalid [engine] section")?;
        Ok(config)
    }

    /// Load a config file.
    ///
    /// An explicit path must exist. Without one, `twenty.toml` is used if present,
    /// otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }
}
