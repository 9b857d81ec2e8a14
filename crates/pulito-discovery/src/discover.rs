//! Demo discovery over a components root.

use std::path::Path;

use crate::conventions::DemoConventions;
use crate::pair::{Classified, CompleteDemo, DemoPair, PartialDemo};
use crate::scanner::{component_dirs, scan_component, DiscoveryError};

/// Everything found under a components root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Complete demos, in directory name order
    pub demos: Vec<CompleteDemo>,

    /// Directories with only one of the two demo files
    pub partial: Vec<PartialDemo>,
}

/// Find every complete demo under `root`.
///
/// Each directory is scanned and validated before the next one is read, so
/// the first violation stops discovery. Partial directories are collected in
/// [`Discovery::partial`] for the caller to report or reject; directories
/// without demo files are skipped silently.
pub fn discover_demos(
    root: &Path,
    conventions: &DemoConventions,
) -> Result<Discovery, DiscoveryError> {
    conventions.validate()?;

    let mut discovery = Discovery::default();

    for dir in component_dirs(root)? {
        let pair = DemoPair::from_candidates(scan_component(&dir, conventions)?)?;

        match pair.classify() {
            Classified::Complete(demo) => {
                tracing::debug!("Found demo {} in {}", demo.name, demo.dir.display());
                discovery.demos.push(demo);
            }
            Classified::Partial(partial) => {
                tracing::debug!(
                    "Incomplete demo in {} (missing {})",
                    partial.dir.display(),
                    partial.missing
                );
                discovery.partial.push(partial);
            }
            Classified::Absent => {}
        }
    }

    Ok(discovery)
}
