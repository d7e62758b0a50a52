//! # Plycase CLI Application
//!
//! Terminal front end for the plywood case calculator. See the `case_cli`
//! library for argument handling.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use case_cli::{init_logger, is_usage_error, run, Cli};
use case_core::errors::CalcError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if is_usage_error(&err) {
                let _ = Cli::command().print_help();
                return ExitCode::FAILURE;
            }

            tracing::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            if cli.json {
                if let Some(calc_err) = err.downcast_ref::<CalcError>() {
                    if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                        eprintln!();
                        eprintln!("Error JSON:");
                        eprintln!("{}", json);
                    }
                }
            }
            ExitCode::FAILURE
        }
    }
}
