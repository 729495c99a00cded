//! treeform CLI
//!
//! Turns JSON, HTML, Markdown and YAML outlines into project trees.

mod cli;
mod commands;
mod config;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::formats::{run_example, run_formats, run_syntax};
use crate::commands::init::run_init;
use crate::commands::parse::{ParseArgs, run_parse};
use crate::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the selected command. `Ok(true)` means the input was rejected.
fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Commands::Parse {
            file,
            format,
            output,
            compact,
        } => {
            let config = load_config(cli)?;
            run_parse(
                &config,
                ParseArgs {
                    file: file.as_deref(),
                    format: format.as_deref(),
                    output: *output,
                    compact: *compact,
                },
            )
        }
        Commands::Formats => {
            run_formats(&load_config(cli)?.registry());
            Ok(false)
        }
        Commands::Example { format } => {
            run_example(&load_config(cli)?.registry(), format)?;
            Ok(false)
        }
        Commands::Syntax { format } => {
            run_syntax(&load_config(cli)?.registry(), format)?;
            Ok(false)
        }
        Commands::Init { force } => {
            run_init(*force)?;
            Ok(false)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    Ok(Config::load(cli.config.as_deref(), &cwd)?)
}
