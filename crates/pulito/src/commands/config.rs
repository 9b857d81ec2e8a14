//! Configuration generation command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pulito_config::{common_builder, Mode, Synthesis, SynthesisOptions};

use crate::settings::Settings;

/// Synthesize the configuration for `root`.
pub fn synthesize(
    settings: &Settings,
    root: &Path,
    mode: Mode,
    strict: bool,
) -> Result<Synthesis> {
    let options = SynthesisOptions {
        mode,
        conventions: settings.conventions(),
        strict: strict || settings.demos.strict,
    };

    let synthesis = common_builder(root, &settings.template_options(), &options)
        .with_context(|| format!("Failed to generate configuration for {}", root.display()))?;

    synthesis
        .config
        .validate()
        .context("Invalid module rule in pulito.toml")?;

    Ok(synthesis)
}

/// Run the config command.
pub fn run(
    settings: &Settings,
    root: &Path,
    mode: Mode,
    out: Option<PathBuf>,
    strict: bool,
    compact: bool,
) -> Result<()> {
    tracing::info!("Generating {} configuration for {}", mode, root.display());

    let synthesis = synthesize(settings, root, mode, strict)?;
    let json = if compact {
        synthesis.config.to_json_compact()
    } else {
        synthesis.config.to_json()
    }
    .context("Failed to serialize configuration")?;

    match out {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    if !synthesis.warnings.is_empty() {
        tracing::warn!(
            "Skipped {} component(s) with only one demo file",
            synthesis.warnings.len()
        );
    }

    Ok(())
}
