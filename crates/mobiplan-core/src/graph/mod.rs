//! City graph model and shortest-path search
//!
//! - `types`: nodes, undirected weighted edges, validated graph, route results
//! - `dijkstra`: minimum-weight path between two nodes

pub mod dijkstra;
pub mod types;

pub use dijkstra::find_shortest_path;
pub use types::{Edge, Graph, Leg, Node, RouteResult};
