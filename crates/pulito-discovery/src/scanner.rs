//! One-level directory scanning for demo candidates.
//!
//! Only the immediate subdirectories of the root are considered component
//! directories, and only their immediate files are classified. Listings are
//! sorted by file name so repeated scans of the same tree agree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::conventions::{DemoConventions, DemoKind};

/// Demo candidates found in one component directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    /// Component directory
    pub dir: PathBuf,

    /// Files ending in the script suffix, sorted by name
    pub scripts: Vec<PathBuf>,

    /// Files ending in the markup suffix, sorted by name
    pub markups: Vec<PathBuf>,
}

impl CandidateSet {
    /// Base name of the component directory.
    pub fn name(&self) -> String {
        self.dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether the directory holds no demo files at all.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.markups.is_empty()
    }
}

/// Errors that can occur during discovery.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Failed to read directory {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Only one {kind} demo file is allowed per directory: {} in {}",
        .file.display(),
        .dir.display()
    )]
    ConventionViolation {
        dir: PathBuf,
        file: PathBuf,
        kind: DemoKind,
    },

    #[error("Invalid demo conventions: {0}")]
    InvalidConventions(String),
}

impl DiscoveryError {
    fn traversal(fallback: &Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop"));
        Self::Traversal { path, source }
    }
}

/// Scan every component directory under `root`.
///
/// Fails on the first unreadable directory; no partial listing is returned.
pub fn scan_components(
    root: &Path,
    conventions: &DemoConventions,
) -> Result<Vec<CandidateSet>, DiscoveryError> {
    conventions.validate()?;

    component_dirs(root)?
        .iter()
        .map(|dir| scan_component(dir, conventions))
        .collect()
}

/// List the immediate subdirectories of `root`, sorted by name.
///
/// Symlinks are not followed, so a link to a directory is not a component.
pub fn component_dirs(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let metadata = fs::metadata(root).map_err(|source| DiscoveryError::Traversal {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DiscoveryError::Traversal {
            path: root.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut dirs = Vec::new();
    for entry in listing(root) {
        let entry = entry.map_err(|e| DiscoveryError::traversal(root, e))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    Ok(dirs)
}

/// Classify the immediate files of one component directory.
pub fn scan_component(
    dir: &Path,
    conventions: &DemoConventions,
) -> Result<CandidateSet, DiscoveryError> {
    let mut set = CandidateSet {
        dir: dir.to_path_buf(),
        scripts: Vec::new(),
        markups: Vec::new(),
    };

    for entry in listing(dir) {
        let entry = entry.map_err(|e| DiscoveryError::traversal(dir, e))?;

        // Nested directories are never descended into.
        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if conventions.is_markup(&file_name) {
            set.markups.push(entry.path().to_path_buf());
        }
        if conventions.is_script(&file_name) {
            set.scripts.push(entry.path().to_path_buf());
        }
    }

    tracing::trace!(
        "Scanned {}: {} script(s), {} markup file(s)",
        dir.display(),
        set.scripts.len(),
        set.markups.len()
    );

    Ok(set)
}

fn listing(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn lists_subdirectories_in_name_order() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("zeta-sk")).unwrap();
        fs::create_dir_all(root.join("alpha-sk")).unwrap();
        fs::create_dir_all(root.join("mid-sk")).unwrap();
        touch(&root.join("README.md"));

        let dirs = component_dirs(root).unwrap();

        assert_eq!(
            dirs,
            vec![
                root.join("alpha-sk"),
                root.join("mid-sk"),
                root.join("zeta-sk"),
            ]
        );
    }

    #[test]
    fn classifies_files_by_suffix() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("widget-sk");
        touch(&dir.join("widget-sk-demo.js"));
        touch(&dir.join("widget-sk-demo.html"));
        touch(&dir.join("widget-sk.js"));
        touch(&dir.join("widget-sk.scss"));

        let set = scan_component(&dir, &DemoConventions::default()).unwrap();

        assert_eq!(set.name(), "widget-sk");
        assert_eq!(set.scripts, vec![dir.join("widget-sk-demo.js")]);
        assert_eq!(set.markups, vec![dir.join("widget-sk-demo.html")]);
    }

    #[test]
    fn does_not_recurse_into_nested_directories() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("widget-sk");
        touch(&dir.join("nested").join("nested-demo.js"));
        touch(&dir.join("nested").join("nested-demo.html"));
        fs::create_dir_all(dir.join("folder-demo.js")).unwrap();

        let sets = scan_components(temp.path(), &DemoConventions::default()).unwrap();

        assert_eq!(sets.len(), 1);
        assert!(sets[0].is_empty());
    }

    #[test]
    fn missing_root_is_a_traversal_failure() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("does-not-exist");

        let result = scan_components(&missing, &DemoConventions::default());

        assert!(
            matches!(result, Err(DiscoveryError::Traversal { ref path, .. }) if *path == missing)
        );
    }

    #[test]
    fn file_root_is_a_traversal_failure() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        touch(&file);

        let result = component_dirs(&file);

        assert!(matches!(result, Err(DiscoveryError::Traversal { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_component_directory_aborts_scan() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let root = temp.path();
        touch(&root.join("alpha-sk").join("alpha-sk-demo.js"));
        touch(&root.join("locked-sk").join("locked-sk-demo.js"));
        let locked = root.join("locked-sk");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read the directory anyway.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = scan_components(root, &DemoConventions::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(DiscoveryError::Traversal { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected traversal failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_components() {
        let temp = tempdir().unwrap();
        let real = temp.path().join("real");
        touch(&real.join("real-sk").join("real-sk-demo.js"));
        let root = temp.path().join("root");
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(real.join("real-sk"), root.join("linked-sk")).unwrap();

        let dirs = component_dirs(&root).unwrap();

        assert!(dirs.is_empty());
    }
}
