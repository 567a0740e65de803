use crate::bail_invalid;
use crate::error::Result;
use crate::modes::types::{ModeProposal, Preference, ScoringWeights, TransportMode};

/// Score one mode for a distance
fn propose(
    distance: f64,
    mode: &TransportMode,
    (w_time, w_cost): (f64, f64),
    weights: &ScoringWeights,
) -> ModeProposal {
    let time = distance / mode.speed;
    let cost = distance * mode.cost_per_distance;
    let score = w_time * time + w_cost * (cost / weights.cost_normalization);

    ModeProposal {
        mode: mode.id.clone(),
        label: mode.display_label().to_string(),
        time,
        cost,
        score,
    }
}

/// Rank every mode in `modes` for `distance` using the default weights.
///
/// Output is sorted ascending by score; equal scores keep catalog order.
pub fn rank_modes(
    distance: f64,
    modes: &[TransportMode],
    preference: Preference,
) -> Result<Vec<ModeProposal>> {
    rank_modes_with(distance, modes, preference, &ScoringWeights::default())
}

/// Rank every mode in `modes` for `distance` with explicit weights
#[tracing::instrument(skip(modes, weights), fields(modes = modes.len()))]
pub fn rank_modes_with(
    distance: f64,
    modes: &[TransportMode],
    preference: Preference,
    weights: &ScoringWeights,
) -> Result<Vec<ModeProposal>> {
    if !distance.is_finite() || distance < 0.0 {
        bail_invalid!("distance", distance);
    }

    let pair = weights.for_preference(preference);
    let mut proposals: Vec<ModeProposal> = modes
        .iter()
        .map(|mode| propose(distance, mode, pair, weights))
        .collect();

    // sort_by is stable
    proposals.sort_by(|a, b| a.score.total_cmp(&b.score));

    if let Some(best) = proposals.first() {
        tracing::debug!(best = %best.mode, score = best.score, "modes ranked");
    }
    Ok(proposals)
}
