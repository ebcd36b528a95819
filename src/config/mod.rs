//! Configuration module for SafeShelf
//!
//! This module handles:
//! - Project-level configuration (safeshelf.toml)
//! - Scoring customization
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, CliDefaults, ProjectConfig, ScoringConfig,
    CONFIG_FILE_NAME,
};
