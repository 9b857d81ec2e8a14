//! File naming conventions for component demo pages.

use std::fmt;

use crate::scanner::DiscoveryError;

/// Default suffix of a demo script, e.g. `push-selection-sk-demo.js`.
pub const DEFAULT_SCRIPT_SUFFIX: &str = "-demo.js";

/// Default suffix of a demo page template, e.g. `push-selection-sk-demo.html`.
pub const DEFAULT_MARKUP_SUFFIX: &str = "-demo.html";

/// The two kinds of file that make up a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    /// Script compiled as the demo entry point
    Script,
    /// HTML template the demo page is generated from
    Markup,
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script => f.write_str("script"),
            Self::Markup => f.write_str("markup"),
        }
    }
}

/// Suffixes used to recognize demo files inside a component directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConventions {
    /// Suffix of demo scripts
    pub script_suffix: String,

    /// Suffix of demo templates
    pub markup_suffix: String,
}

impl Default for DemoConventions {
    fn default() -> Self {
        Self {
            script_suffix: DEFAULT_SCRIPT_SUFFIX.to_string(),
            markup_suffix: DEFAULT_MARKUP_SUFFIX.to_string(),
        }
    }
}

impl DemoConventions {
    /// Create conventions with custom suffixes.
    pub fn new(script_suffix: impl Into<String>, markup_suffix: impl Into<String>) -> Self {
        Self {
            script_suffix: script_suffix.into(),
            markup_suffix: markup_suffix.into(),
        }
    }

    /// Suffix for the given kind of demo file.
    pub fn suffix(&self, kind: DemoKind) -> &str {
        match kind {
            DemoKind::Script => &self.script_suffix,
            DemoKind::Markup => &self.markup_suffix,
        }
    }

    /// Check whether a file name is a demo script.
    pub fn is_script(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.script_suffix)
    }

    /// Check whether a file name is a demo template.
    pub fn is_markup(&self, file_name: &str) -> bool {
        file_name.ends_with(&self.markup_suffix)
    }

    /// Reject suffixes that cannot tell the two kinds apart.
    pub fn validate(&self) -> Result<(), DiscoveryError> {
        if self.script_suffix.is_empty() || self.markup_suffix.is_empty() {
            return Err(DiscoveryError::InvalidConventions(
                "demo suffixes must not be empty".to_string(),
            ));
        }
        if self.script_suffix.ends_with(&self.markup_suffix)
            || self.markup_suffix.ends_with(&self.script_suffix)
        {
            return Err(DiscoveryError::InvalidConventions(format!(
                "suffixes '{}' and '{}' overlap",
                self.script_suffix, self.markup_suffix
            )));
        }
        Ok(())
    }
}
