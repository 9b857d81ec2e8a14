//! Demo pair validation.

use std::path::{Path, PathBuf};

use crate::conventions::DemoKind;
use crate::scanner::{CandidateSet, DiscoveryError};

/// How much of a demo a component directory provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairState {
    /// Both the script and the template are present
    Complete,
    /// Exactly one of the two is present
    Partial,
    /// Neither is present; the directory is not a component
    Absent,
}

/// The validated demo files of one component directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoPair {
    /// Base name of the component directory
    pub name: String,

    /// Component directory
    pub dir: PathBuf,

    /// Demo script, if any
    pub script: Option<PathBuf>,

    /// Demo template, if any
    pub markup: Option<PathBuf>,
}

/// A component with both demo files, ready to become a build entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteDemo {
    pub name: String,
    pub dir: PathBuf,
    pub script: PathBuf,
    pub markup: PathBuf,
}

/// A component directory holding only one of the two demo files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialDemo {
    pub name: String,
    pub dir: PathBuf,
    /// The kind of file that was not found
    pub missing: DemoKind,
}

/// Outcome of classifying a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Complete(CompleteDemo),
    Partial(PartialDemo),
    Absent,
}

impl DemoPair {
    /// Validate raw candidates: at most one file of each kind.
    ///
    /// A second match of either kind is a naming convention violation that
    /// names the directory and the second file found.
    pub fn from_candidates(set: CandidateSet) -> Result<Self, DiscoveryError> {
        let name = set.name();
        let script = single(&set.dir, set.scripts, DemoKind::Script)?;
        let markup = single(&set.dir, set.markups, DemoKind::Markup)?;

        Ok(Self {
            name,
            dir: set.dir,
            script,
            markup,
        })
    }

    /// Current state of the pair.
    pub fn state(&self) -> PairState {
        match (&self.script, &self.markup) {
            (Some(_), Some(_)) => PairState::Complete,
            (None, None) => PairState::Absent,
            _ => PairState::Partial,
        }
    }

    /// Split the pair by state.
    pub fn classify(self) -> Classified {
        match (self.script, self.markup) {
            (Some(script), Some(markup)) => Classified::Complete(CompleteDemo {
                name: self.name,
                dir: self.dir,
                script,
                markup,
            }),
            (Some(_), None) => Classified::Partial(PartialDemo {
                name: self.name,
                dir: self.dir,
                missing: DemoKind::Markup,
            }),
            (None, Some(_)) => Classified::Partial(PartialDemo {
                name: self.name,
                dir: self.dir,
                missing: DemoKind::Script,
            }),
            (None, None) => Classified::Absent,
        }
    }
}

fn single(
    dir: &Path,
    mut candidates: Vec<PathBuf>,
    kind: DemoKind,
) -> Result<Option<PathBuf>, DiscoveryError> {
    if candidates.len() > 1 {
        return Err(DiscoveryError::ConventionViolation {
            dir: dir.to_path_buf(),
            file: candidates.swap_remove(1),
            kind,
        });
    }
    Ok(candidates.pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidates(scripts: &[&str], markups: &[&str]) -> CandidateSet {
        let dir = PathBuf::from("components/widget-sk");
        CandidateSet {
            scripts: scripts.iter().map(|f| dir.join(f)).collect(),
            markups: markups.iter().map(|f| dir.join(f)).collect(),
            dir,
        }
    }

    #[test]
    fn complete_pair_is_promoted() {
        let pair = DemoPair::from_candidates(candidates(
            &["widget-sk-demo.js"],
            &["widget-sk-demo.html"],
        ))
        .unwrap();

        assert_eq!(pair.state(), PairState::Complete);
        assert_eq!(
            pair.classify(),
            Classified::Complete(CompleteDemo {
                name: "widget-sk".to_string(),
                dir: PathBuf::from("components/widget-sk"),
                script: PathBuf::from("components/widget-sk/widget-sk-demo.js"),
                markup: PathBuf::from("components/widget-sk/widget-sk-demo.html"),
            })
        );
    }

    #[test]
    fn one_sided_pair_is_partial() {
        let pair = DemoPair::from_candidates(candidates(&["widget-sk-demo.js"], &[])).unwrap();

        assert_eq!(pair.state(), PairState::Partial);
        match pair.classify() {
            Classified::Partial(partial) => assert_eq!(partial.missing, DemoKind::Markup),
            other => panic!("expected partial pair, got {:?}", other),
        }
    }

    #[test]
    fn empty_directory_is_absent() {
        let pair = DemoPair::from_candidates(candidates(&[], &[])).unwrap();

        assert_eq!(pair.state(), PairState::Absent);
        assert_eq!(pair.classify(), Classified::Absent);
    }

    #[test]
    fn second_script_violates_convention() {
        let result = DemoPair::from_candidates(candidates(
            &["widget-sk-demo.js", "widget-sk-v2-demo.js"],
            &["widget-sk-demo.html"],
        ));

        match result {
            Err(DiscoveryError::ConventionViolation { dir, file, kind }) => {
                assert_eq!(dir, PathBuf::from("components/widget-sk"));
                assert_eq!(
                    file,
                    PathBuf::from("components/widget-sk/widget-sk-v2-demo.js")
                );
                assert_eq!(kind, DemoKind::Script);
            }
            other => panic!("expected convention violation, got {:?}", other),
        }
    }

    #[test]
    fn second_markup_violates_convention() {
        let result = DemoPair::from_candidates(candidates(
            &[],
            &["a-demo.html", "b-demo.html", "c-demo.html"],
        ));

        assert!(matches!(
            result,
            Err(DiscoveryError::ConventionViolation {
                kind: DemoKind::Markup,
                ..
            })
        ));
    }
}
