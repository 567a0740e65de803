use crate::commands::{proposals, route};
use mobiplan_core::planner::Plan;
use mobiplan_core::records::format_header;

/// Output plan in records format
pub fn output_plan_records(plan: &Plan) {
    println!(
        "{}",
        format_header(
            "plan",
            &[
                ("from", plan.start.clone()),
                ("to", plan.end.clone()),
                ("preference", plan.preference.to_string()),
                ("planned_at", plan.planned_at.to_rfc3339()),
            ]
        )
    );
    for line in route::route_records(&plan.start, &plan.end, plan.route.as_ref()) {
        println!("{}", line);
    }
    for line in proposals::proposal_records(&plan.proposals) {
        println!("{}", line);
    }
}
