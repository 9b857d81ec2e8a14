//! Demo page discovery for component directories.
//!
//! Each immediate subdirectory of a components root may hold one demo script
//! and one demo template, recognized by file name suffix. This crate finds
//! those pairs and enforces that no directory holds more than one of each.

pub mod conventions;
pub mod discover;
pub mod pair;
pub mod scanner;

pub use conventions::{DemoConventions, DemoKind, DEFAULT_MARKUP_SUFFIX, DEFAULT_SCRIPT_SUFFIX};
pub use discover::{discover_demos, Discovery};
pub use pair::{Classified, CompleteDemo, DemoPair, PairState, PartialDemo};
pub use scanner::{component_dirs, scan_component, scan_components, CandidateSet, DiscoveryError};
