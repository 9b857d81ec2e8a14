//! Demo listing command.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use pulito_discovery::{discover_demos, DemoConventions, Discovery};

use crate::settings::Settings;

/// Run the demos command.
pub fn run(settings: &Settings, root: &Path) -> Result<()> {
    let conventions = settings.conventions();
    let discovery = discover_demos(root, &conventions)
        .with_context(|| format!("Failed to discover demos in {}", root.display()))?;

    let stdout = io::stdout();
    write_listing(&mut stdout.lock(), &discovery, root, &conventions)
        .context("Failed to write demo listing")?;

    tracing::info!(
        "Found {} demo(s), {} incomplete",
        discovery.demos.len(),
        discovery.partial.len()
    );

    Ok(())
}

/// One line per component: complete demos with their two files, then the
/// incomplete ones with the file they lack.
fn write_listing(
    out: &mut impl Write,
    discovery: &Discovery,
    root: &Path,
    conventions: &DemoConventions,
) -> io::Result<()> {
    for demo in &discovery.demos {
        writeln!(
            out,
            "{}\t{}\t{}",
            demo.name,
            display_relative(&demo.script, root),
            display_relative(&demo.markup, root)
        )?;
    }

    for partial in &discovery.partial {
        writeln!(
            out,
            "{}\tmissing {} (*{})",
            partial.name,
            partial.missing,
            conventions.suffix(partial.missing)
        )?;
    }

    Ok(())
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
