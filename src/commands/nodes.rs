//! Nodes command: list the graph
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use mobiplan_core::error::Result;
use mobiplan_core::format::format_distance;
use mobiplan_core::records::{format_edge_record, format_header, format_node_record};

/// Execute the nodes command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let workspace = ctx.load_workspace()?;
    let graph = &workspace.graph;

    match ctx.cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "nodes": graph.nodes(),
                "edges": graph.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            println!("Nodes ({}):", graph.node_count());
            for node in graph.nodes() {
                println!("  {}  {}", node.id, node.display_label());
            }
            println!("Edges ({}):", graph.edge_count());
            for edge in graph.edges() {
                println!(
                    "  {} - {}  {}",
                    edge.from,
                    edge.to,
                    format_distance(edge.distance)
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                format_header(
                    "nodes",
                    &[
                        ("nodes", graph.node_count().to_string()),
                        ("edges", graph.edge_count().to_string()),
                    ]
                )
            );
            for node in graph.nodes() {
                println!("{}", format_node_record(node));
            }
            for edge in graph.edges() {
                println!("{}", format_edge_record(edge));
            }
        }
    }

    Ok(())
}
