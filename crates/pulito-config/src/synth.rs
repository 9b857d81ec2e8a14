//! Configuration synthesis from discovered demos.

use std::path::{Path, PathBuf};

use pulito_discovery::{
    discover_demos, CompleteDemo, DemoConventions, DemoKind, DiscoveryError, PartialDemo,
};

use crate::builder::ConfigBuilder;
use crate::mode::Mode;
use crate::model::{BuildConfiguration, OptimizerDescriptor, Plugin};
use crate::template::{base_configuration, TemplateOptions};

/// Options controlling one synthesis run.
#[derive(Debug, Clone, Default)]
pub struct SynthesisOptions {
    /// Build mode
    pub mode: Mode,

    /// Demo file naming conventions
    pub conventions: DemoConventions,

    /// Treat a directory with only one demo file as an error
    pub strict: bool,
}

/// A synthesized configuration and the problems noticed along the way.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub config: BuildConfiguration,

    /// Directories skipped because they hold only one demo file
    pub warnings: Vec<PartialDemo>,
}

/// Errors that abort synthesis. No configuration is produced.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(
        "Duplicate entry name '{name}': {} conflicts with {}",
        .duplicate.display(),
        .existing.display()
    )]
    DuplicateEntryName {
        name: String,
        existing: PathBuf,
        duplicate: PathBuf,
    },

    #[error(
        "{}: an element needs both a script and a markup demo file (missing {missing})",
        .dir.display()
    )]
    PartialComponent { dir: PathBuf, missing: DemoKind },
}

/// Complete `base` for the components under `root`.
///
/// Production appends the minifier and never touches the filesystem.
/// Development adds one entry and one page per complete demo, in directory
/// name order.
pub fn synthesize(
    root: &Path,
    base: BuildConfiguration,
    options: &SynthesisOptions,
) -> Result<Synthesis, SynthesisError> {
    let builder = ConfigBuilder::from(base);

    match options.mode {
        Mode::Production => {
            tracing::debug!("Production mode, skipping demo discovery");
            Ok(Synthesis {
                config: builder
                    .plugin(Plugin::Minify(OptimizerDescriptor::default()))
                    .build(),
                warnings: Vec::new(),
            })
        }
        Mode::Development => {
            let discovery = discover_demos(root, &options.conventions)?;
            report_partials(&discovery.partial, options)?;

            let config = add_demos(builder, &discovery.demos)?.build();

            tracing::info!(
                "Added {} demo page(s) from {}",
                discovery.demos.len(),
                root.display()
            );

            Ok(Synthesis {
                config,
                warnings: discovery.partial,
            })
        }
    }
}

/// Reject partial demos in strict mode, otherwise warn about each one.
fn report_partials(
    partial: &[PartialDemo],
    options: &SynthesisOptions,
) -> Result<(), SynthesisError> {
    if options.strict {
        if let Some(first) = partial.first() {
            return Err(SynthesisError::PartialComponent {
                dir: first.dir.clone(),
                missing: first.missing,
            });
        }
    }

    for demo in partial {
        tracing::warn!(
            "{}: an element needs both a script and a markup demo file (missing {} ending in '{}')",
            demo.dir.display(),
            demo.missing,
            options.conventions.suffix(demo.missing)
        );
    }

    Ok(())
}

/// Add every demo, in order, to `builder`.
pub fn add_demos(
    builder: ConfigBuilder,
    demos: &[CompleteDemo],
) -> Result<ConfigBuilder, SynthesisError> {
    demos.iter().try_fold(builder, |builder, demo| builder.demo(demo))
}

/// Base configuration for `project_dir` with the demos under it wired in.
///
/// The project directory is made absolute first, so entries, templates and
/// output paths all share the same absolute prefix.
pub fn common_builder(
    project_dir: &Path,
    template: &TemplateOptions,
    options: &SynthesisOptions,
) -> Result<Synthesis, SynthesisError> {
    let project_dir =
        std::path::absolute(project_dir).map_err(|source| DiscoveryError::Traversal {
            path: project_dir.to_path_buf(),
            source,
        })?;

    synthesize(
        &project_dir,
        base_configuration(&project_dir, template),
        options,
    )
}
