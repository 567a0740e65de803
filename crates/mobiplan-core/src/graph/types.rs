use crate::bail_graph;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A location in the city graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Label for display, falling back to the id when no label was given
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// An undirected weighted connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// Static weighted undirected graph.
///
/// Construction enforces that node ids are unique, edge endpoints exist and
/// weights are finite and non-negative. The sum of all edge weights must stay
/// finite, so no path length can overflow. Nodes keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, f64)>>,
    total_distance: f64,
}

/// Ids appear unquoted in records output
pub(crate) fn validate_id(id: &str) -> std::result::Result<(), &'static str> {
    if id.trim().is_empty() {
        return Err("must not be empty");
    }
    if id.chars().any(|c| c.is_whitespace() || c == ',' || c == '"') {
        return Err("must not contain whitespace, commas or quotes");
    }
    Ok(())
}

impl Graph {
    /// Build a graph from node and edge lists, validating every entry
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut graph = Graph::default();
        for node in nodes {
            graph.add_node(node)?;
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if let Err(reason) = validate_id(&node.id) {
            bail_graph!("node id {:?} {}", node.id, reason);
        }
        if self.index.contains_key(&node.id) {
            bail_graph!("duplicate node id {}", node.id);
        }
        self.index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if !edge.distance.is_finite() || edge.distance < 0.0 {
            bail_graph!(
                "edge {}-{} has invalid distance {}",
                edge.from,
                edge.to,
                edge.distance
            );
        }
        let Some(&a) = self.index.get(&edge.from) else {
            bail_graph!("edge references unknown node {}", edge.from);
        };
        let Some(&b) = self.index.get(&edge.to) else {
            bail_graph!("edge references unknown node {}", edge.to);
        };
        let total_distance = self.total_distance + edge.distance;
        if !total_distance.is_finite() {
            bail_graph!(
                "edge {}-{} overflows the total graph distance",
                edge.from,
                edge.to
            );
        }

        self.total_distance = total_distance;
        self.adjacency[a].push((b, edge.distance));
        if a != b {
            self.adjacency[b].push((a, edge.distance));
        }
        self.edges.push(edge);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Weight of the lightest edge joining `a` and `b`, in either orientation
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let from = *self.index.get(a)?;
        let to = *self.index.get(b)?;
        self.adjacency[from]
            .iter()
            .filter(|(neighbor, _)| *neighbor == to)
            .map(|(_, weight)| *weight)
            .min_by(f64::total_cmp)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn id_at(&self, idx: usize) -> &str {
        &self.nodes[idx].id
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }
}

/// One traversed edge of a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Shortest path between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Node ids from start to end, inclusive
    pub path: Vec<String>,
    /// Sum of traversed edge weights
    pub distance: f64,
    pub legs: Vec<Leg>,
}

impl RouteResult {
    #[cfg(test)]
    pub(crate) fn start(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn end(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.legs.len()
    }
}
