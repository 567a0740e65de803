//! Modes command: list the transport mode catalog
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use mobiplan_core::error::Result;
use mobiplan_core::format::format_distance;
use mobiplan_core::records::{format_header, format_mode_record};

/// Execute the modes command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let workspace = ctx.load_workspace()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&workspace.modes)?);
        }
        OutputFormat::Human => {
            for mode in &workspace.modes {
                println!(
                    "{:<12} {:<12} speed {:>6}  cost/distance {}",
                    mode.id,
                    mode.display_label(),
                    format_distance(mode.speed),
                    mode.cost_per_distance
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header("modes", &[("count", workspace.modes.len().to_string())])
            );
            for mode in &workspace.modes {
                println!("{}", format_mode_record(mode));
            }
        }
    }

    Ok(())
}
