//! `albumkit`: validate date,name records, GUIDs and IPv6 addresses from
//! the shell.

mod cli;
mod commands;
mod config;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::cli::Cli;
use crate::config::Settings;

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let settings = Settings::load(cli)?;
    albumkit_log::init_with(settings.log_config()).context("failed to initialize logging")?;
    tracing::debug!(?settings, "settings resolved");

    let inputs = commands::collect_inputs(cli.command.inputs(), io::stdin().lock())
        .context("failed to read inputs from stdin")?;
    let all_valid = commands::run(&cli.command, &settings, &inputs, io::stdout().lock())
        .context("failed to write results")?;
    Ok(all_valid)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
