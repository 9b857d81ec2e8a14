//! Base configuration shared by every project.
//!
//! Projects start from this skeleton and add their own entries and plugins.
//! Stylesheets go through sass, postcss and css loaders and are extracted into
//! `[name]-bundle.css`; HTML is loaded with `html-loader`. Loaders are resolved
//! from the toolkit's own `node_modules` first, so projects do not need to
//! install them.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::model::{
    BuildConfiguration, LoaderUse, ModuleRules, Output, Plugin, ResolveLoader, Rule,
};

/// Settings for the static part of the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateOptions {
    /// Output directory, relative to the project
    pub output_dir: String,

    /// Bundle filename pattern
    pub output_filename: String,

    /// Public URL prefix
    pub public_path: String,

    /// Directory holding the shared loaders and `postcss.config.js`
    pub toolkit_dir: PathBuf,

    /// Extra rules appended after the built-in ones
    pub extra_rules: Vec<Rule>,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            output_dir: "dist".to_string(),
            output_filename: "[name]-bundle.js?[chunkhash]".to_string(),
            public_path: "/".to_string(),
            toolkit_dir: PathBuf::from("."),
            extra_rules: vec![],
        }
    }
}

/// Build the base configuration for a project directory.
///
/// The result has no entries; callers add them directly or through
/// [`crate::synthesize`].
pub fn base_configuration(project_dir: &Path, options: &TemplateOptions) -> BuildConfiguration {
    let project_dir = absolute(project_dir);
    let toolkit_dir = absolute(&options.toolkit_dir);

    let mut rules = vec![style_rule(&toolkit_dir), html_rule()];
    rules.extend(options.extra_rules.iter().cloned());

    BuildConfiguration {
        entry: BTreeMap::new(),
        output: Output {
            path: project_dir.join(&options.output_dir),
            filename: options.output_filename.clone(),
            public_path: options.public_path.clone(),
        },
        resolve_loader: ResolveLoader {
            modules: vec![toolkit_dir.join("node_modules"), PathBuf::from("node_modules")],
        },
        module: ModuleRules { rules },
        plugins: vec![
            Plugin::ExtractText {
                filename: "[name]-bundle.css?[contenthash]".to_string(),
            },
            Plugin::Clean {
                paths: vec![options.output_dir.clone()],
                root: project_dir,
            },
        ],
    }
}

fn style_rule(toolkit_dir: &Path) -> Rule {
    Rule {
        test: r"\.[s]?css$".to_string(),
        extract: true,
        loaders: vec![
            // postcss-loader and sass-loader
            LoaderUse::with_options("css-loader", json!({ "importLoaders": 2 })),
            LoaderUse::with_options(
                "postcss-loader",
                json!({ "config": { "path": toolkit_dir.join("postcss.config.js") } }),
            ),
            // SCSS is a superset of CSS, so plain stylesheets go through it too.
            LoaderUse::with_options("sass-loader", json!({ "includePaths": [toolkit_dir] })),
        ],
    }
}

fn html_rule() -> Rule {
    Rule {
        test: r"\.html$".to_string(),
        extract: false,
        loaders: vec![LoaderUse::with_options(
            "html-loader",
            json!({ "name": "[name].[ext]" }),
        )],
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
