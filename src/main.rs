mod application;
mod cli;
mod domain;
mod infra;

use anyhow::Result;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use application::config::{EnvConfig, MissingDataFile};
use cli::Cli;
use clap::Parser;

fn main() -> Result<ExitCode> {
    // A .env in the working directory may supply STUDENTS_DATA or RUST_LOG
    let dotenv = dotenvy::from_path(".env");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("students=warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match dotenv {
        Ok(()) => tracing::debug!("Loaded environment from .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }

    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
    let env = EnvConfig::from_env()?;

    match cli.run(&env) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is::<MissingDataFile>() => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}
