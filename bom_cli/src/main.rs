//! # Framewright CLI
//!
//! Command-line front end for `bom_core`: compute a bill of materials from
//! flags or a request file, and keep a job's builds in a `.fwp` project.
//!
//! Logs go to stderr. `RUST_LOG` wins when set; otherwise `-v` raises the
//! level from warn.

mod args;
mod commands;
mod report;

use std::process::ExitCode;

use bom_core::errors::CalcError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let global = cli.global;
    let outcome = match cli.command {
        Commands::Calc(args) => commands::calc(args, &global),
        Commands::Run(args) => commands::run(args, &global),
        Commands::Project(cmd) => commands::project(cmd, &global),
        Commands::Profiles => commands::profiles(&global),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {e}");
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{json}");
    }
}
