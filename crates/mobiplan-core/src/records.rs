//! Utilities for records output format
//!
//! One record per line, prefixed by a record kind:
//! `H` header, `R` route, `L` leg, `N` node, `E` edge, `M` mode proposal or
//! catalog entry.

use crate::format::format_distance;
use crate::graph::{Edge, Leg, Node, RouteResult};
use crate::modes::{ModeProposal, TransportMode};

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line; `fields` are appended as `key=value`
pub fn format_header(command: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!(
        "H mobiplan={} records=1 command={}",
        env!("CARGO_PKG_VERSION"),
        command
    );
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a route line, or a not-found marker
pub fn format_route_record(start: &str, end: &str, route: Option<&RouteResult>) -> String {
    match route {
        Some(route) => format!(
            "R {} {} found=true distance={} hops={} path={}",
            start,
            end,
            format_distance(route.distance),
            route.hops(),
            route.path.join(",")
        ),
        None => format!("R {} {} found=false", start, end),
    }
}

pub fn format_leg_record(leg: &Leg) -> String {
    format!(
        "L {} {} distance={}",
        leg.from,
        leg.to,
        format_distance(leg.distance)
    )
}

pub fn format_node_record(node: &Node) -> String {
    format!("N {} \"{}\"", node.id, escape_quotes(node.display_label()))
}

pub fn format_edge_record(edge: &Edge) -> String {
    format!(
        "E {} {} distance={}",
        edge.from,
        edge.to,
        format_distance(edge.distance)
    )
}

/// Format a ranked proposal; `rank` starts at 1
pub fn format_proposal_record(rank: usize, proposal: &ModeProposal) -> String {
    format!(
        "M {} {} \"{}\" time_min={} cost={:.2} score={:.3}",
        rank,
        proposal.mode,
        escape_quotes(&proposal.label),
        proposal.time_minutes(),
        proposal.cost,
        proposal.score
    )
}

/// Format a catalog entry
pub fn format_mode_record(mode: &TransportMode) -> String {
    format!(
        "M {} \"{}\" speed={} cost_per_distance={}",
        mode.id,
        escape_quotes(mode.display_label()),
        format_distance(mode.speed),
        mode.cost_per_distance
    )
}
