use crate::models::{CatProfile, FoodItem, LifeStage, RecommendationScore, ScoreBreakdown};
use crate::planner::compatibility::is_life_stage_appropriate;
use crate::planner::config::ScoringWeights;
use crate::planner::constants::*;
use crate::planner::rounding;

/// Nutrition sub-score components (points, unrounded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionPoints {
    pub protein: f64,
    pub fat_balance: f64,
    pub fiber: f64,
    pub completeness: f64,
}

impl NutritionPoints {
    pub fn total(&self) -> f64 {
        self.protein + self.fat_balance + self.fiber + self.completeness
    }
}

/// Suitability sub-score components (points, unrounded).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuitabilityPoints {
    pub life_stage: f64,
    pub health_match: f64,
    pub benefits: f64,
}

impl SuitabilityPoints {
    pub fn total(&self) -> f64 {
        self.life_stage + self.health_match + self.benefits
    }
}

/// Min/max cost per 100 kcal over a candidate batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

impl CostRange {
    /// Range over finite costs; `None` for an empty batch.
    pub fn from_costs(costs: impl IntoIterator<Item = f64>) -> Option<Self> {
        costs
            .into_iter()
            .filter(|c| c.is_finite())
            .fold(None, |range, cost| match range {
                None => Some(CostRange {
                    min: cost,
                    max: cost,
                }),
                Some(r) => Some(CostRange {
                    min: r.min.min(cost),
                    max: r.max.max(cost),
                }),
            })
    }
}

/// Protein re-based against non-moisture mass.
pub fn dry_matter_protein(food: &FoodItem) -> f64 {
    let dry_matter = 100.0 - food.moisture_pct;
    if dry_matter <= 0.0 {
        return 0.0;
    }
    food.protein_pct / dry_matter * 100.0
}

/// Nutrition points: protein quality, fat balance, fiber band, completeness.
pub fn nutrition_points(food: &FoodItem) -> NutritionPoints {
    let protein =
        (dry_matter_protein(food) / PROTEIN_CEILING_DMB).clamp(0.0, 1.0) * PROTEIN_MAX_POINTS;

    // Deviation from the ideal fat:protein ratio, normalized and clamped
    let fat_balance = if food.protein_pct > 0.0 {
        let ratio = food.fat_pct / food.protein_pct;
        let deviation =
            ((ratio - IDEAL_FAT_PROTEIN_RATIO).abs() / FAT_RATIO_TOLERANCE).clamp(0.0, 1.0);
        (1.0 - deviation) * FAT_BALANCE_MAX_POINTS
    } else {
        0.0
    };

    let fiber = if food.fiber_pct < FIBER_MIN_PCT {
        FIBER_LOW_POINTS
    } else if food.fiber_pct > FIBER_MAX_PCT {
        FIBER_HIGH_POINTS
    } else {
        FIBER_IN_RANGE_POINTS
    };

    let completeness = if food.complete_and_balanced {
        COMPLETENESS_POINTS
    } else {
        0.0
    };

    NutritionPoints {
        protein,
        fat_balance,
        fiber,
        completeness,
    }
}

/// Value score (0-100): cheapest in the batch scores 100, dearest 0.
pub fn value_score(cost_per_100kcal: f64, range: Option<&CostRange>) -> f64 {
    let Some(range) = range else {
        return DEFAULT_VALUE_SCORE;
    };
    let spread = range.max - range.min;
    if spread <= 0.0 {
        return 100.0;
    }
    ((range.max - cost_per_100kcal) / spread * 100.0).clamp(0.0, 100.0)
}

/// Share of a condition's listed benefits the food carries.
///
/// Conditions without a record or without listed benefits count as covered.
fn condition_coverage(food: &FoodItem, condition: &str) -> f64 {
    let Some(req) = condition_requirements(condition) else {
        return 1.0;
    };
    let listed = req.required_benefits.len() + req.preferred_benefits.len();
    if listed == 0 {
        return 1.0;
    }
    let hits = req
        .required_benefits
        .iter()
        .chain(req.preferred_benefits.iter())
        .filter(|tag| food.has_benefit(tag))
        .count();
    hits as f64 / listed as f64
}

/// Suitability points: life stage, health-condition coverage, benefit tags.
pub fn suitability_points(
    food: &FoodItem,
    profile: &CatProfile,
    conditions: &[String],
) -> SuitabilityPoints {
    let life_stage = if food.life_stage == LifeStage::All {
        LIFE_STAGE_UNIVERSAL_POINTS
    } else if is_life_stage_appropriate(food, profile) {
        LIFE_STAGE_MATCH_POINTS
    } else {
        0.0
    };

    let health_match = if conditions.is_empty() {
        HEALTH_MATCH_MAX_POINTS
    } else {
        let share = HEALTH_MATCH_MAX_POINTS / conditions.len() as f64;
        conditions
            .iter()
            .map(|c| share * condition_coverage(food, c))
            .sum()
    };

    let benefits =
        (food.special_benefits.len() as f64 * BENEFIT_POINTS_EACH).min(BENEFIT_MAX_POINTS);

    SuitabilityPoints {
        life_stage,
        health_match,
        benefits,
    }
}

/// Full score for one food within a batch.
///
/// Sub-scores are rounded independently before weighting.
pub fn score_food(
    food: &FoodItem,
    profile: &CatProfile,
    conditions: &[String],
    cost_per_100kcal: f64,
    range: Option<&CostRange>,
    weights: &ScoringWeights,
) -> RecommendationScore {
    let nutrition = nutrition_points(food);
    let value = value_score(cost_per_100kcal, range);
    let suitability = suitability_points(food, profile, conditions);

    let nutrition_score = nutrition.total().clamp(0.0, 100.0).round();
    let value_score = value.round();
    let suitability_score = suitability.total().clamp(0.0, 100.0).round();

    let overall = (nutrition_score * weights.nutrition
        + value_score * weights.value
        + suitability_score * weights.suitability)
        .round();

    RecommendationScore {
        overall: overall as u32,
        nutrition: nutrition_score as u32,
        value: value_score as u32,
        suitability: suitability_score as u32,
        breakdown: ScoreBreakdown {
            protein: rounding::round_to(nutrition.protein, 2),
            fat_balance: rounding::round_to(nutrition.fat_balance, 2),
            fiber: nutrition.fiber,
            cost_efficiency: rounding::round_to(value, 2),
            life_stage: suitability.life_stage,
            health_match: rounding::round_to(suitability.health_match, 2),
        },
    }
}
