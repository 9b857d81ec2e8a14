//! Bundler configuration synthesis for component demo pages.
//!
//! Starts from a shared base configuration and, in development mode, adds one
//! entry point and one generated HTML page for every component directory that
//! carries a demo. Production builds get a minifier instead.

pub mod builder;
pub mod mode;
pub mod model;
pub mod synth;
pub mod template;

pub use builder::ConfigBuilder;
pub use mode::{Mode, MODE_ENV_VAR};
pub use model::{
    BuildConfiguration, LoaderUse, ModuleRules, OptimizerDescriptor, Output, OutputDescriptor,
    Plugin, ResolveLoader, Rule, RuleError,
};
pub use synth::{
    add_demos, common_builder, synthesize, Synthesis, SynthesisError, SynthesisOptions,
};
pub use template::{base_configuration, TemplateOptions};
