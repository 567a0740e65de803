use crate::cli::Cli;
use crate::commands::{proposals, route};
use mobiplan_core::graph::Graph;
use mobiplan_core::planner::Plan;

/// Output plan in human-readable format
pub fn output_plan_human(cli: &Cli, graph: &Graph, plan: &Plan) {
    route::output_human(graph, &plan.start, &plan.end, plan.route.as_ref());

    if !plan.found() && !cli.quiet {
        println!("Ranking modes for distance 0");
    }

    println!();
    if !cli.quiet {
        println!("Suggested modes ({}):", plan.preference);
    }
    proposals::output_human(&plan.proposals);

    if let (Some(best), false) = (plan.best(), cli.quiet) {
        println!();
        println!("Recommended: {}", best.label);
    }
}
