//! Init command - write a default safeshelf.toml

use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# SafeShelf Configuration

[scoring]
# Maximum deduction from each of the heart and metabolic domains
domain_penalty_cap = 40

# Flat deduction for ultra-processed products (NOVA group 4)
ultra_processed_penalty = 20

[defaults]
# Output format: text, json, markdown
format = "text"
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }

    let config_path = path.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("Already initialized at {}", config_path.display());
        return Ok(());
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {}", config_path.display());
    Ok(())
}
