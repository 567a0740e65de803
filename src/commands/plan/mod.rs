//! Plan command: route between two nodes, then rank the catalog for the trip

mod human;
mod json;
mod records;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use mobiplan_core::error::Result;
use mobiplan_core::modes::Preference;
use mobiplan_core::planner::{plan, PlanRequest};

/// Execute the plan command
pub fn execute(ctx: &CommandContext, start: &str, end: &str, preference: Preference) -> Result<()> {
    let workspace = ctx.load_workspace()?;
    let request = PlanRequest::new(start, end, preference);
    let plan = plan(
        &workspace.graph,
        &workspace.modes,
        &request,
        &workspace.config.scoring,
    )?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), found = plan.found(), "plan");

    match ctx.cli.format {
        OutputFormat::Json => json::output_plan_json(&plan)?,
        OutputFormat::Human => human::output_plan_human(ctx.cli, &workspace.graph, &plan),
        OutputFormat::Records => records::output_plan_records(&plan),
    }

    Ok(())
}
