use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use irsz::sheet::ColumnVocabulary;

/// Workbook path relative to the project root.
pub const DEFAULT_INPUT: &str = "docs/iranyitoszamok.xls";
/// Output path relative to the project root.
pub const DEFAULT_OUTPUT: &str = "assets/postal_codes.json";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub columns: ColumnVocabulary,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
