//! Route planning: shortest path followed by mode ranking

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::graph::{find_shortest_path, Graph, RouteResult};
use crate::modes::{rank_modes_with, ModeProposal, Preference, ScoringWeights, TransportMode};

/// A single planning query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub start: String,
    pub end: String,
    pub preference: Preference,
}

impl PlanRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>, preference: Preference) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            preference,
        }
    }
}

/// Result of a planning query
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub start: String,
    pub end: String,
    pub preference: Preference,
    /// `None` when the endpoints are not connected
    pub route: Option<RouteResult>,
    /// Distance the modes were ranked for (0 when there is no route)
    pub distance: f64,
    pub proposals: Vec<ModeProposal>,
    pub planned_at: DateTime<Utc>,
}

impl Plan {
    pub fn found(&self) -> bool {
        self.route.is_some()
    }

    /// Top-ranked proposal
    pub fn best(&self) -> Option<&ModeProposal> {
        self.proposals.first()
    }
}

/// Find the route between the requested endpoints and rank the catalog for it.
///
/// Unknown endpoints fail with `InvalidEndpoint`. Disconnected endpoints are
/// not an error: the plan carries no route and modes are ranked for a
/// distance of zero.
#[tracing::instrument(skip(graph, modes, weights), fields(start = %request.start, end = %request.end, preference = %request.preference))]
pub fn plan(
    graph: &Graph,
    modes: &[TransportMode],
    request: &PlanRequest,
    weights: &ScoringWeights,
) -> Result<Plan> {
    let route = find_shortest_path(graph, &request.start, &request.end)?;

    let distance = match &route {
        Some(route) => route.distance,
        None => {
            tracing::warn!(
                start = %request.start,
                end = %request.end,
                "no route between endpoints, ranking modes for zero distance"
            );
            0.0
        }
    };

    let proposals = rank_modes_with(distance, modes, request.preference, weights)?;

    Ok(Plan {
        start: request.start.clone(),
        end: request.end.clone(),
        preference: request.preference,
        route,
        distance,
        proposals,
        planned_at: Utc::now(),
    })
}
