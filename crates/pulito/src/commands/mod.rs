//! CLI command implementations.

pub mod config;
pub mod demos;
pub mod init;
