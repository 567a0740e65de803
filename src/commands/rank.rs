//! Rank command: score the mode catalog for a bare distance
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::proposals;
use mobiplan_core::error::Result;
use mobiplan_core::format::format_distance;
use mobiplan_core::modes::{rank_modes_with, Preference};
use mobiplan_core::records::format_header;

/// Execute the rank command
pub fn execute(ctx: &CommandContext, distance: f64, preference: Preference) -> Result<()> {
    let workspace = ctx.load_workspace()?;
    let ranked = rank_modes_with(
        distance,
        &workspace.modes,
        preference,
        &workspace.config.scoring,
    )?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "distance": distance,
                "preference": preference,
                "proposals": proposals::proposals_json(&ranked),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Modes for distance {} ({}):",
                    format_distance(distance),
                    preference
                );
            }
            proposals::output_human(&ranked);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "rank",
                    &[
                        ("distance", format_distance(distance)),
                        ("preference", preference.to_string()),
                    ]
                )
            );
            for line in proposals::proposal_records(&ranked) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
