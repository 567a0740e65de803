//! mobiplan: shortest routes over a city graph, with transport modes ranked
//! for the trip

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::parse::report_parse_failure;
use cli::Cli;
use commands::dispatch::{self, CommandContext};
use mobiplan_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging unavailable: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let ctx = CommandContext::new(&cli, start);
    match dispatch::run(&ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ctx.report(&err),
    }
}
