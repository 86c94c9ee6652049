// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sutra-hl CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use sutra_hl::cli::{Cli, Command};
use sutra_hl::error::ExitCode;

mod cmd_explain;
mod cmd_highlight;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SUTRA_HL_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sutra-hl: {}", e);
            match e.downcast_ref::<sutra_hl::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Highlight(args)) => cmd_highlight::run(&cli, args),
        Some(Command::Explain(args)) => cmd_explain::run(args),
    }
}
