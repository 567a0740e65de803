//! Transport mode catalog types and the mode ranker

pub mod ranker;
pub mod types;

pub use ranker::{rank_modes, rank_modes_with};
pub use types::{validate_catalog, ModeProposal, Preference, ScoringWeights, TransportMode};
