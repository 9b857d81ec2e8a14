//! Project settings file (pulito.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use pulito_config::{LoaderUse, Rule, TemplateOptions};
use pulito_discovery::{DemoConventions, DEFAULT_MARKUP_SUFFIX, DEFAULT_SCRIPT_SUFFIX};

/// Configuration file structure (pulito.toml).
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub demos: DemoSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub toolkit: ToolkitSettings,
    /// Rules appended after the built-in style and HTML rules
    #[serde(default)]
    pub rules: Vec<RuleSettings>,

    /// Directory the settings were loaded from; relative paths resolve here
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct DemoSettings {
    #[serde(default = "default_script_suffix")]
    pub script_suffix: String,
    #[serde(default = "default_markup_suffix")]
    pub markup_suffix: String,
    /// Fail when a component has only one of its demo files
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    #[serde(default = "default_output_filename")]
    pub filename: String,
    #[serde(default = "default_public_path")]
    pub public_path: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ToolkitSettings {
    /// Where the shared loaders and postcss.config.js are installed
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct RuleSettings {
    pub test: String,
    #[serde(default)]
    pub extract: bool,
    pub loaders: Vec<String>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            script_suffix: default_script_suffix(),
            markup_suffix: default_markup_suffix(),
            strict: false,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            filename: default_output_filename(),
            public_path: default_public_path(),
        }
    }
}

fn default_script_suffix() -> String {
    DEFAULT_SCRIPT_SUFFIX.to_string()
}
fn default_markup_suffix() -> String {
    DEFAULT_MARKUP_SUFFIX.to_string()
}
fn default_output_dir() -> String {
    "dist".to_string()
}
fn default_output_filename() -> String {
    "[name]-bundle.js?[chunkhash]".to_string()
}
fn default_public_path() -> String {
    "/".to_string()
}

impl Settings {
    /// Load settings from `path` if it exists.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self {
                base_dir,
                ..Default::default()
            });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut settings = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        settings.base_dir = base_dir;

        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Demo naming conventions.
    pub fn conventions(&self) -> DemoConventions {
        DemoConventions::new(&self.demos.script_suffix, &self.demos.markup_suffix)
    }

    /// Options for the base configuration.
    pub fn template_options(&self) -> TemplateOptions {
        let toolkit_dir = match &self.toolkit.dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        };

        TemplateOptions {
            output_dir: self.output.dir.clone(),
            output_filename: self.output.filename.clone(),
            public_path: self.output.public_path.clone(),
            toolkit_dir,
            extra_rules: self.rules.iter().map(RuleSettings::to_rule).collect(),
        }
    }
}

impl RuleSettings {
    fn to_rule(&self) -> Rule {
        Rule {
            test: self.test.clone(),
            extract: self.extract,
            loaders: self.loaders.iter().map(LoaderUse::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::parse("").unwrap();

        assert_eq!(settings.conventions(), DemoConventions::default());
        assert!(!settings.demos.strict);
        assert_eq!(settings.output.dir, "dist");
        assert_eq!(settings.output.filename, "[name]-bundle.js?[chunkhash]");
        assert!(settings.rules.is_empty());
    }

    #[test]
    fn parses_all_sections() {
        let settings = Settings::parse(
            r#"
[demos]
script_suffix = ".demo.ts"
markup_suffix = ".demo.html"
strict = true

[output]
dir = "build"
public_path = "/static/"

[toolkit]
dir = "tools/pulito"

[[rules]]
test = "\\.svg$"
loaders = ["svg-inline-loader"]
"#,
        )
        .unwrap();

        assert_eq!(
            settings.conventions(),
            DemoConventions::new(".demo.ts", ".demo.html")
        );
        assert!(settings.demos.strict);

        let options = settings.template_options();
        assert_eq!(options.output_dir, "build");
        assert_eq!(options.output_filename, "[name]-bundle.js?[chunkhash]");
        assert_eq!(options.public_path, "/static/");
        assert_eq!(options.toolkit_dir, PathBuf::from("tools/pulito"));
        assert_eq!(options.extra_rules.len(), 1);
        assert_eq!(options.extra_rules[0].test, r"\.svg$");
        assert_eq!(options.extra_rules[0].loaders[0].loader, "svg-inline-loader");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let temp = tempdir().unwrap();

        let settings = Settings::load(&temp.path().join("pulito.toml")).unwrap();

        assert_eq!(settings.base_dir, temp.path());
        assert_eq!(settings.template_options().toolkit_dir, temp.path());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("pulito.toml");
        fs::write(&path, "[demos\nstrict = yes").unwrap();

        assert!(Settings::load(&path).is_err());
    }
}
