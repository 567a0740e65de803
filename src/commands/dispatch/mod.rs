//! Command dispatch logic for mobiplan

use mobiplan_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(ctx: &CommandContext) -> Result<()> {
    debug!(elapsed = ?ctx.start.elapsed(), "dispatch");

    match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(cmd) => cmd.execute(ctx),
    }
}
