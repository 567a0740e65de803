//! Command implementations for all mobiplan commands

use crate::cli::{Commands, ConfigCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{config, modes, nodes, plan, rank, route};
use mobiplan_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route { start, end } => route::execute(ctx, start, end),
            Commands::Rank {
                distance,
                preference,
            } => rank::execute(ctx, *distance, *preference),
            Commands::Plan {
                start,
                end,
                preference,
            } => plan::execute(ctx, start, end, *preference),
            Commands::Nodes => nodes::execute(ctx),
            Commands::Modes => modes::execute(ctx),
            Commands::Config(cmd) => match cmd {
                ConfigCommands::Show => config::execute_show(ctx),
                ConfigCommands::Path => config::execute_path(ctx),
                ConfigCommands::Init { force } => config::execute_init(ctx, *force),
            },
        }
    }
}
