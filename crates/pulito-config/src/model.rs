//! Build configuration handed to the bundler.
//!
//! Serializes to the JSON shape a bundler driver script reads: entries,
//! output settings, loader resolution, module rules and an ordered plugin list.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::builder::ConfigBuilder;

/// The complete configuration for one bundler run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Entry name to the script compilation starts from.
    ///
    /// Kept sorted by name, so the emitted JSON lists entries alphabetically
    /// whatever order they were added in.
    pub entry: BTreeMap<String, PathBuf>,

    /// Where and how bundles are written
    pub output: Output,

    /// Search path for loaders
    pub resolve_loader: ResolveLoader,

    /// Per-file transformation rules
    pub module: ModuleRules,

    /// Plugins, applied in order
    pub plugins: Vec<Plugin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Output directory
    pub path: PathBuf,

    /// Bundle filename pattern
    pub filename: String,

    /// Public URL prefix of emitted assets
    pub public_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveLoader {
    pub modules: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModuleRules {
    pub rules: Vec<Rule>,
}

/// Loaders applied to files whose path matches `test`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Regular expression matched against module paths
    pub test: String,

    /// Extract the loader output into a separate stylesheet
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub extract: bool,

    /// Loaders, applied last to first
    #[serde(rename = "use")]
    pub loaders: Vec<LoaderUse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderUse {
    pub loader: String,

    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub options: serde_json::Value,
}

impl LoaderUse {
    /// A loader with no options.
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: serde_json::Value::Null,
        }
    }

    /// A loader with options.
    pub fn with_options(loader: impl Into<String>, options: serde_json::Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

impl Rule {
    /// Check whether a module path is handled by this rule.
    pub fn matches(&self, path: &str) -> Result<bool, RuleError> {
        Ok(self.pattern()?.is_match(path))
    }

    fn pattern(&self) -> Result<Regex, RuleError> {
        Regex::new(&self.test).map_err(|e| RuleError::InvalidPattern {
            test: self.test.clone(),
            message: e.to_string(),
        })
    }
}

/// Errors in module rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid rule pattern '{test}': {message}")]
    InvalidPattern { test: String, message: String },
}

/// A bundler plugin or output descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
    /// Extract stylesheets into their own files
    ExtractText { filename: String },

    /// Remove previous build output before building
    Clean { paths: Vec<String>, root: PathBuf },

    /// Generate one HTML page for one entry
    Html(OutputDescriptor),

    /// Minify the emitted bundles
    Minify(OptimizerDescriptor),
}

/// Generates `<name>.html` from a template, embedding only the `<name>` chunk.
///
/// Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputDescriptor {
    filename: String,
    template: PathBuf,
    chunks: Vec<String>,
}

impl OutputDescriptor {
    /// Descriptor for the page of entry `name`.
    pub fn for_entry(name: &str, template: &Path) -> Self {
        Self {
            filename: format!("{}.html", name),
            template: template.to_path_buf(),
            chunks: vec![name.to_string()],
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn template(&self) -> &Path {
        &self.template
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }
}

/// Minifier settings for production builds. The default strips comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptimizerDescriptor {
    /// Keep comments in minified output
    pub comments: bool,
}

impl BuildConfiguration {
    /// Continue extending this configuration.
    pub fn into_builder(self) -> ConfigBuilder {
        ConfigBuilder::from(self)
    }

    /// HTML page descriptors, in plugin order.
    pub fn output_descriptors(&self) -> impl Iterator<Item = &OutputDescriptor> {
        self.plugins.iter().filter_map(|p| match p {
            Plugin::Html(descriptor) => Some(descriptor),
            _ => None,
        })
    }

    /// Check that every module rule pattern compiles.
    pub fn validate(&self) -> Result<(), RuleError> {
        for rule in &self.module.rules {
            rule.pattern()?;
        }
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to single-line JSON.
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
