//! Project-level configuration support
//!
//! Loads configuration from `safeshelf.toml` in the working directory, or
//! from an explicit path.
//!
//! # Configuration Format
//!
//! ```toml
//! # safeshelf.toml
//!
//! [scoring]
//! domain_penalty_cap = 40        # heart and metabolic, each
//! ultra_processed_penalty = 20   # NOVA group 4
//!
//! [defaults]
//! format = "text"
//! ```
//!
//! Defaults reproduce the reference scoring exactly.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "safeshelf.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Scoring configuration for health score calculation
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Maximum deduction from each of the heart and metabolic domains (default: 40)
    #[serde(default = "default_domain_penalty_cap")]
    pub domain_penalty_cap: u32,

    /// Flat deduction for ultra-processed (NOVA 4) products (default: 20)
    #[serde(default = "default_ultra_processed_penalty")]
    pub ultra_processed_penalty: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            domain_penalty_cap: default_domain_penalty_cap(),
            ultra_processed_penalty: default_ultra_processed_penalty(),
        }
    }
}

fn default_domain_penalty_cap() -> u32 {
    40
}

fn default_ultra_processed_penalty() -> u32 {
    20
}

impl ScoringConfig {
    /// Both values must stay within the 0-100 score range
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.domain_penalty_cap > 100 {
            bail!(
                "scoring.domain_penalty_cap must be at most 100 (got {})",
                self.domain_penalty_cap
            );
        }
        if self.ultra_processed_penalty > 100 {
            bail!(
                "scoring.ultra_processed_penalty must be at most 100 (got {})",
                self.ultra_processed_penalty
            );
        }
        Ok(())
    }
}

/// Defaults for CLI flags
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliDefaults {
    /// Default output format (text, json, markdown)
    pub format: Option<String>,
}

/// Load configuration from `dir/safeshelf.toml`.
///
/// A missing file yields defaults. A broken file is logged and ignored.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No project config found, using defaults");
        return ProjectConfig::default();
    }
    match load_config_file(&path) {
        Ok(config) => {
            debug!("Loaded project config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {:#}", path.display(), e);
            ProjectConfig::default()
        }
    }
}

/// Load configuration from an explicit TOML file. Errors are returned.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let config: ProjectConfig =
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))?;
    config.scoring.validate()?;
    Ok(config)
}
