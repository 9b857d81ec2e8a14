//! Pulito CLI - bundler configuration generator for web component projects.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use pulito_config::Mode;

mod commands;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "pulito")]
#[command(about = "Bundler configuration generator for web component projects")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to pulito.toml config file
    #[arg(short, long, default_value = "pulito.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default pulito.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate the bundler configuration as JSON
    Config {
        /// Project directory whose subdirectories hold components
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Build mode (defaults to NODE_ENV)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Write the configuration to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Fail when a component has only one of its demo files
        #[arg(long)]
        strict: bool,

        /// Print the JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// List the demo pages found under a directory
    Demos {
        /// Project directory whose subdirectories hold components
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Production,
    Development,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Production => Mode::Production,
            ModeArg::Development => Mode::Development,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so generated JSON on stdout stays clean.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Config {
            root,
            mode,
            out,
            strict,
            compact,
        } => {
            let settings = Settings::load(&cli.config)?;
            let mode = mode.map(Mode::from).unwrap_or_else(Mode::from_env);
            commands::config::run(&settings, &root, mode, out, strict, compact)?;
        }
        Commands::Demos { root } => {
            let settings = Settings::load(&cli.config)?;
            commands::demos::run(&settings, &root)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_config_command() {
        let cli = Cli::parse_from(["pulito", "config", "elements", "--mode", "production"]);

        match cli.command {
            Commands::Config { root, mode, .. } => {
                assert_eq!(root, PathBuf::from("elements"));
                assert!(matches!(mode, Some(ModeArg::Production)));
            }
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn parses_compact_flag() {
        let cli = Cli::parse_from(["pulito", "config", "--compact", "--strict"]);

        match cli.command {
            Commands::Config {
                root,
                compact,
                strict,
                ..
            } => {
                assert_eq!(root, PathBuf::from("."));
                assert!(compact);
                assert!(strict);
            }
            _ => panic!("expected config command"),
        }
    }
}
