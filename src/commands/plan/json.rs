use crate::commands::{proposals, route};
use mobiplan_core::error::Result;
use mobiplan_core::planner::Plan;

/// Output plan in JSON format
pub fn output_plan_json(plan: &Plan) -> Result<()> {
    let json = serde_json::json!({
        "from": plan.start,
        "to": plan.end,
        "preference": plan.preference,
        "planned_at": plan.planned_at.to_rfc3339(),
        "route": route::route_json(&plan.start, &plan.end, plan.route.as_ref()),
        "distance": plan.distance,
        "recommended": plan.best().map(|p| p.mode.clone()),
        "proposals": proposals::proposals_json(&plan.proposals),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
