use crate::error::{MobiplanError, Result};
use crate::graph::types::{Graph, Leg, RouteResult};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance,
/// then by node insertion order so ties resolve deterministically)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: usize,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Working state scoped to a single search
struct DijkstraState {
    tentative: Vec<f64>,
    predecessor: Vec<Option<(usize, f64)>>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(node_count: usize, source: usize) -> Self {
        let mut state = Self {
            tentative: vec![f64::INFINITY; node_count],
            predecessor: vec![None; node_count],
            visited: vec![false; node_count],
            heap: BinaryHeap::new(),
        };
        state.tentative[source] = 0.0;
        state.heap.push(Reverse(HeapEntry {
            node: source,
            distance: 0.0,
        }));
        state
    }

    /// Pop the closest unvisited node, skipping stale heap entries
    fn next_unvisited(&mut self) -> Option<HeapEntry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.visited[entry.node] {
                self.visited[entry.node] = true;
                return Some(entry);
            }
        }
        None
    }

    fn relax(&mut self, from: usize, to: usize, weight: f64) {
        if self.visited[to] {
            return;
        }
        let candidate = self.tentative[from] + weight;
        if candidate < self.tentative[to] {
            self.tentative[to] = candidate;
            self.predecessor[to] = Some((from, weight));
            self.heap.push(Reverse(HeapEntry {
                node: to,
                distance: candidate,
            }));
        }
    }
}

/// Walk predecessor links back from `target` to rebuild the path
fn reconstruct_path(graph: &Graph, state: &DijkstraState, target: usize) -> RouteResult {
    let mut path = vec![graph.id_at(target).to_string()];
    let mut legs = Vec::new();

    let mut current = target;
    while let Some((prev, weight)) = state.predecessor[current] {
        legs.push(Leg {
            from: graph.id_at(prev).to_string(),
            to: graph.id_at(current).to_string(),
            distance: weight,
        });
        path.push(graph.id_at(prev).to_string());
        current = prev;
    }

    path.reverse();
    legs.reverse();

    RouteResult {
        path,
        distance: state.tentative[target],
        legs,
    }
}

/// Find the minimum-weight path between two nodes.
///
/// Returns `Ok(None)` when `end` is unreachable from `start`, and
/// `InvalidEndpoint` when either id is not in the graph. Edge weights are
/// assumed non-negative, which `Graph` construction guarantees.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn find_shortest_path(graph: &Graph, start: &str, end: &str) -> Result<Option<RouteResult>> {
    let source = graph
        .index_of(start)
        .ok_or_else(|| MobiplanError::invalid_endpoint(start))?;
    let target = graph
        .index_of(end)
        .ok_or_else(|| MobiplanError::invalid_endpoint(end))?;

    let mut state = DijkstraState::new(graph.node_count(), source);
    let mut settled = 0usize;

    while let Some(HeapEntry { node: current, .. }) = state.next_unvisited() {
        settled += 1;
        if current == target {
            break;
        }

        for &(neighbor, weight) in graph.adjacent(current) {
            state.relax(current, neighbor, weight);
        }
    }

    if state.tentative[target].is_infinite() {
        tracing::debug!(settled, "no route");
        return Ok(None);
    }

    let route = reconstruct_path(graph, &state, target);
    tracing::debug!(
        settled,
        distance = route.distance,
        hops = route.hops(),
        "route found"
    );
    Ok(Some(route))
}
