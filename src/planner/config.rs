use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Sub-score weights for the overall recommendation score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub nutrition: f64,
    pub value: f64,
    pub suitability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            nutrition: NUTRITION_WEIGHT,
            value: VALUE_WEIGHT,
            suitability: SUITABILITY_WEIGHT,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.nutrition + self.value + self.suitability
    }
}

/// Tunable planner knobs. Defaults come from [`crate::planner::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub weights: ScoringWeights,
    /// Largest accepted deviation from the energy target, in percent.
    pub max_deviation_pct: f64,
    pub combo_min_gap_kcal: f64,
    pub combo_priority_pct: f64,
    pub ranking_band_pct: f64,
    pub budget_pick_min_score: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_deviation_pct: MAX_DEVIATION_PCT,
            combo_min_gap_kcal: COMBO_MIN_GAP_KCAL,
            combo_priority_pct: COMBO_PRIORITY_PCT,
            ranking_band_pct: RANKING_BAND_PCT,
            budget_pick_min_score: BUDGET_PICK_MIN_SCORE,
        }
    }
}

impl PlannerConfig {
    /// Load a config from JSON. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject knobs the planner cannot work with.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if [w.nutrition, w.value, w.suitability]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(PlannerError::InvalidInput(
                "Scoring weights must be non-negative".to_string(),
            ));
        }
        if (w.sum() - 1.0).abs() > 1e-6 {
            return Err(PlannerError::InvalidInput(format!(
                "Scoring weights must sum to 1.0 (got {:.3})",
                w.sum()
            )));
        }
        if !(self.max_deviation_pct > 0.0) {
            return Err(PlannerError::InvalidInput(
                "max_deviation_pct must be positive".to_string(),
            ));
        }
        if self.combo_min_gap_kcal < 0.0 || self.combo_priority_pct < 0.0 {
            return Err(PlannerError::InvalidInput(
                "Combo thresholds must be non-negative".to_string(),
            ));
        }
        if !(self.ranking_band_pct > 0.0) {
            return Err(PlannerError::InvalidInput(
                "ranking_band_pct must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
