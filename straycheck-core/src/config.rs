//! Configuration loading from straycheck.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::analyze::AnalysisOptions;

/// Main configuration structure for straycheck.toml.
#[derive(Debug, Deserialize, Default)]
pub struct StraycheckConfig {
    /// Default analysis options; CLI flags override these.
    pub analysis: Option<AnalysisOptions>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from straycheck.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<StraycheckConfig>> {
    let path = root.join("straycheck.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid straycheck.toml")?;
    Ok(Some(cfg))
}
