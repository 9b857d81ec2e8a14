//! Accumulating builder for build configurations.

use std::collections::btree_map::Entry;
use std::path::PathBuf;

use pulito_discovery::CompleteDemo;

use crate::model::{BuildConfiguration, OutputDescriptor, Plugin};
use crate::synth::SynthesisError;

/// Adds entries and plugins to a configuration, consuming itself at each step.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: BuildConfiguration,
}

impl From<BuildConfiguration> for ConfigBuilder {
    fn from(config: BuildConfiguration) -> Self {
        Self { config }
    }
}

impl ConfigBuilder {
    /// Add an entry point. Entry names must be unique.
    pub fn entry(
        mut self,
        name: impl Into<String>,
        script: impl Into<PathBuf>,
    ) -> Result<Self, SynthesisError> {
        match self.config.entry.entry(name.into()) {
            Entry::Occupied(existing) => {
                return Err(SynthesisError::DuplicateEntryName {
                    name: existing.key().clone(),
                    existing: existing.get().clone(),
                    duplicate: script.into(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(script.into());
            }
        }
        Ok(self)
    }

    /// Append a plugin after the existing ones.
    pub fn plugin(mut self, plugin: Plugin) -> Self {
        self.config.plugins.push(plugin);
        self
    }

    /// Add a demo as an entry plus the page generated for it.
    pub fn demo(self, demo: &CompleteDemo) -> Result<Self, SynthesisError> {
        let descriptor = OutputDescriptor::for_entry(&demo.name, &demo.markup);
        Ok(self
            .entry(demo.name.clone(), demo.script.clone())?
            .plugin(Plugin::Html(descriptor)))
    }

    /// Finish building.
    pub fn build(self) -> BuildConfiguration {
        self.config
    }
}
