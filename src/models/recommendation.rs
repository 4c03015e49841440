use serde::{Deserialize, Serialize};

use crate::models::FoodItem;

/// Superlative label attached to a food within one ranked batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    BestValue,
    BestNutrition,
    BestMatch,
    BudgetPick,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::BestValue => "Best Value",
            Badge::BestNutrition => "Best Nutrition",
            Badge::BestMatch => "Best Match",
            Badge::BudgetPick => "Budget Pick",
        }
    }
}

/// Points contributed by each scoring component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Dry-matter protein points (0-40).
    pub protein: f64,
    /// Fat-to-protein ratio points (0-20).
    pub fat_balance: f64,
    /// Fiber band points (10, 14 or 20).
    pub fiber: f64,
    /// Value sub-score (0-100).
    pub cost_efficiency: f64,
    /// Life-stage points (0, 20 or 25).
    pub life_stage: f64,
    /// Health-condition coverage points (0-50).
    pub health_match: f64,
}

/// Overall score and sub-scores for one food, valid only within its batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationScore {
    pub overall: u32,
    pub nutrition: u32,
    pub value: u32,
    pub suitability: u32,
    pub breakdown: ScoreBreakdown,
}

/// A catalog food with amounts, costs, score and badges for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecommendation {
    pub food: FoodItem,
    pub daily_amount: f64,
    pub per_meal_amount: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub cost_per_100kcal: f64,
    pub score: RecommendationScore,
    pub badges: Vec<Badge>,
}

impl FoodRecommendation {
    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}
