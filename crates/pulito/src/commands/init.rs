//! Initialize pulito in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'pulito config' to generate the bundler configuration.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Pulito Configuration

[demos]
# Each component directory may hold one demo script and one demo page
script_suffix = "-demo.js"
markup_suffix = "-demo.html"

# Fail instead of warning when only one of the two is present
strict = false

[output]
# Output directory, relative to the project
dir = "dist"

# Bundle filename pattern
filename = "[name]-bundle.js?[chunkhash]"

# Public URL prefix
public_path = "/"

[toolkit]
# Directory holding the shared loaders and postcss.config.js
dir = "."

# Extra module rules
# [[rules]]
# test = "\\.svg$"
# loaders = ["svg-inline-loader"]
"#;
