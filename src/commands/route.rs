//! Route command: shortest path between two nodes
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use mobiplan_core::error::Result;
use mobiplan_core::format::format_distance;
use mobiplan_core::graph::{find_shortest_path, Graph, RouteResult};
use mobiplan_core::records::{format_header, format_leg_record, format_route_record};

/// Execute the route command
pub fn execute(ctx: &CommandContext, start: &str, end: &str) -> Result<()> {
    let workspace = ctx.load_workspace()?;
    let route = find_shortest_path(&workspace.graph, start, end)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let json = route_json(start, end, route.as_ref());
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => output_human(&workspace.graph, start, end, route.as_ref()),
        OutputFormat::Records => {
            println!(
                "{}",
                format_header("route", &[("from", start.to_string()), ("to", end.to_string())])
            );
            for line in route_records(start, end, route.as_ref()) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// JSON object for a route lookup, shared with the plan command
pub fn route_json(start: &str, end: &str, route: Option<&RouteResult>) -> serde_json::Value {
    match route {
        Some(route) => serde_json::json!({
            "from": start,
            "to": end,
            "found": true,
            "path": route.path,
            "distance": route.distance,
            "hops": route.hops(),
            "legs": route.legs,
        }),
        None => serde_json::json!({
            "from": start,
            "to": end,
            "found": false,
            "path": [],
            "distance": null,
            "hops": 0,
            "legs": [],
        }),
    }
}

/// R line followed by one L line per leg
pub fn route_records(start: &str, end: &str, route: Option<&RouteResult>) -> Vec<String> {
    let mut lines = vec![format_route_record(start, end, route)];
    if let Some(route) = route {
        lines.extend(route.legs.iter().map(format_leg_record));
    }
    lines
}

/// Human-readable route summary, shared with the plan command
pub fn output_human(graph: &Graph, start: &str, end: &str, route: Option<&RouteResult>) {
    let Some(route) = route else {
        println!("No route from {} to {}", start, end);
        return;
    };

    let labelled: Vec<String> = route
        .path
        .iter()
        .map(|id| match graph.node(id) {
            Some(node) if !node.label.is_empty() => format!("{} ({})", id, node.label),
            _ => id.clone(),
        })
        .collect();

    println!("Route: {}", labelled.join(" -> "));
    for leg in &route.legs {
        println!(
            "  {} -> {}: {}",
            leg.from,
            leg.to,
            format_distance(leg.distance)
        );
    }
    let hop_word = if route.hops() == 1 { "hop" } else { "hops" };
    println!(
        "Distance: {} ({} {})",
        format_distance(route.distance),
        route.hops(),
        hop_word
    );
}
