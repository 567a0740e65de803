//! Shared rendering for ranked mode proposals
use mobiplan_core::modes::ModeProposal;
use mobiplan_core::records::format_proposal_record;

pub fn proposals_json(proposals: &[ModeProposal]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = proposals
        .iter()
        .enumerate()
        .map(|(i, p)| {
            serde_json::json!({
                "rank": i + 1,
                "mode": p.mode,
                "label": p.label,
                "time": p.time,
                "time_minutes": p.time_minutes(),
                "cost": p.cost,
                "score": p.score,
            })
        })
        .collect();
    serde_json::json!(entries)
}

pub fn output_human(proposals: &[ModeProposal]) {
    let width = proposals
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    for (i, p) in proposals.iter().enumerate() {
        println!(
            "{:>2}. {:<width$}  {:>4} min  cost {:>8.2}  score {:.3}",
            i + 1,
            p.label,
            p.time_minutes(),
            p.cost,
            p.display_score(),
            width = width
        );
    }
}

pub fn proposal_records(proposals: &[ModeProposal]) -> Vec<String> {
    proposals
        .iter()
        .enumerate()
        .map(|(i, p)| format_proposal_record(i + 1, p))
        .collect()
}
