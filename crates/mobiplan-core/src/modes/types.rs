use crate::bail_invalid;
use crate::error::{MobiplanError, Result};
use crate::graph::types::validate_id;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transport mode in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportMode {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Distance units per time unit (km/h for the built-in catalog)
    pub speed: f64,
    /// Cost per distance unit
    pub cost_per_distance: f64,
}

impl TransportMode {
    /// Create a validated transport mode
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        speed: f64,
        cost_per_distance: f64,
    ) -> Result<Self> {
        let mode = Self {
            id: id.into(),
            label: label.into(),
            speed,
            cost_per_distance,
        };
        mode.validate()?;
        Ok(mode)
    }

    /// Check that speed is strictly positive and cost non-negative
    pub fn validate(&self) -> Result<()> {
        if let Err(reason) = validate_id(&self.id) {
            return Err(MobiplanError::invalid_mode(&self.id, format!("id {}", reason)));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(MobiplanError::invalid_mode(
                &self.id,
                format!("speed must be positive, got {}", self.speed),
            ));
        }
        if !self.cost_per_distance.is_finite() || self.cost_per_distance < 0.0 {
            return Err(MobiplanError::invalid_mode(
                &self.id,
                format!(
                    "cost per distance must not be negative, got {}",
                    self.cost_per_distance
                ),
            ));
        }
        Ok(())
    }

    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// Validate a whole catalog: every mode valid, ids unique, at least one mode
pub fn validate_catalog(modes: &[TransportMode]) -> Result<()> {
    if modes.is_empty() {
        bail_invalid!("mode catalog", "empty");
    }
    let mut seen = std::collections::HashSet::new();
    for mode in modes {
        mode.validate()?;
        if !seen.insert(mode.id.as_str()) {
            return Err(MobiplanError::invalid_mode(&mode.id, "duplicate mode id"));
        }
    }
    Ok(())
}

/// Caller bias applied when scoring modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Fastest,
    Cheapest,
}

impl FromStr for Preference {
    type Err = MobiplanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fastest" => Ok(Preference::Fastest),
            "cheapest" => Ok(Preference::Cheapest),
            _ => Err(MobiplanError::InvalidPreference(s.to_string())),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preference::Fastest => write!(f, "fastest"),
            Preference::Cheapest => write!(f, "cheapest"),
        }
    }
}

/// Weights used by the ranking score.
///
/// `score = w_time * time + w_cost * (cost / cost_normalization)`, where the
/// preferred dimension gets `preferred_weight` and the other one
/// `secondary_weight`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_preferred_weight")]
    pub preferred_weight: f64,
    #[serde(default = "default_secondary_weight")]
    pub secondary_weight: f64,
    /// Brings cost onto roughly the same scale as time
    #[serde(default = "default_cost_normalization")]
    pub cost_normalization: f64,
}

fn default_preferred_weight() -> f64 {
    0.7
}

fn default_secondary_weight() -> f64 {
    0.3
}

fn default_cost_normalization() -> f64 {
    10.0
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            preferred_weight: default_preferred_weight(),
            secondary_weight: default_secondary_weight(),
            cost_normalization: default_cost_normalization(),
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("preferred_weight", self.preferred_weight),
            ("secondary_weight", self.secondary_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail_invalid!(name, value);
            }
        }
        if !self.cost_normalization.is_finite() || self.cost_normalization <= 0.0 {
            bail_invalid!("cost_normalization", self.cost_normalization);
        }
        Ok(())
    }

    /// (time weight, cost weight) for a preference
    pub fn for_preference(&self, preference: Preference) -> (f64, f64) {
        match preference {
            Preference::Fastest => (self.preferred_weight, self.secondary_weight),
            Preference::Cheapest => (self.secondary_weight, self.preferred_weight),
        }
    }
}

/// A mode annotated with its computed time, cost and score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeProposal {
    pub mode: String,
    pub label: String,
    /// Travel time in the catalog's time unit (hours for the built-in catalog)
    pub time: f64,
    pub cost: f64,
    /// Lower is better
    pub score: f64,
}

impl ModeProposal {
    /// Travel time in whole minutes
    pub fn time_minutes(&self) -> u64 {
        (self.time * 60.0).round() as u64
    }

    /// Score rounded to three decimals
    pub fn display_score(&self) -> f64 {
        (self.score * 1000.0).round() / 1000.0
    }
}
