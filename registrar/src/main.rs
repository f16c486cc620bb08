//! Campus Course & Records Manager console entry point.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use registrar::demo::run_demo;
use registrar::io::config::load_config;
use registrar::shell::run_shell;
use registrar::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "registrar",
    version,
    about = "Campus course and records manager"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "registrar.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive menu loop (the default).
    Shell,
    /// Scripted walkthrough exercising every operation.
    Demo,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => run_shell(&config, io::stdin().lock(), io::stdout().lock())?,
        Command::Demo => run_demo(&config, io::stdout().lock())?,
    }
    Ok(exit_codes::OK)
}
