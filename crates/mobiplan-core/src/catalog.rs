//! Built-in city graph and transport mode catalog

use crate::graph::{Edge, Graph, Node};
use crate::modes::TransportMode;

const CITY_NODES: [(&str, &str); 5] = [
    ("A", "Downtown"),
    ("B", "Uptown"),
    ("C", "Midtown"),
    ("D", "Riverside"),
    ("E", "TechPark"),
];

/// Distances in kilometres
const CITY_EDGES: [(&str, &str, f64); 6] = [
    ("A", "B", 6.0),
    ("A", "C", 4.0),
    ("C", "B", 3.0),
    ("C", "D", 5.0),
    ("C", "E", 7.0),
    ("D", "E", 4.0),
];

/// (id, label, km/h, cost per km)
const MODES: [(&str, &str, f64, f64); 4] = [
    ("metro", "Metro", 60.0, 0.5),
    ("ev", "EV Bike", 20.0, 0.2),
    ("drone", "Drone", 80.0, 1.2),
    ("hyperloop", "Hyperloop", 300.0, 2.0),
];

pub fn default_nodes() -> Vec<Node> {
    CITY_NODES
        .iter()
        .map(|(id, label)| Node::new(*id, *label))
        .collect()
}

pub fn default_edges() -> Vec<Edge> {
    CITY_EDGES
        .iter()
        .map(|(from, to, km)| Edge::new(*from, *to, *km))
        .collect()
}

/// The five-node reference city
pub fn default_city() -> Graph {
    let mut graph = Graph::default();
    for node in default_nodes() {
        // Constant data: ids are unique and non-empty
        let _ = graph.add_node(node);
    }
    for edge in default_edges() {
        let _ = graph.add_edge(edge);
    }
    graph
}

/// Metro, EV bike, drone and hyperloop, in that order
pub fn default_modes() -> Vec<TransportMode> {
    MODES
        .iter()
        .map(|(id, label, speed, cost)| TransportMode {
            id: id.to_string(),
            label: label.to_string(),
            speed: *speed,
            cost_per_distance: *cost,
        })
        .collect()
}
