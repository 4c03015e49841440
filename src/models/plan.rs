use serde::{Deserialize, Serialize};

use crate::models::FoodForm;

/// Daily energy targets derived from a profile. Energies are whole kcal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Resting energy requirement (kcal/day).
    pub rer: f64,
    /// Daily energy requirement (kcal/day).
    pub der: f64,
    pub life_stage_factor: f64,
    pub factor_label: String,
    /// Treat allowance, 10% of DER.
    pub treat_kcal: f64,
    pub meals_per_day: u32,
}

/// A discretized daily amount of one food and how well it hits the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionOption {
    pub daily_amount: f64,
    pub per_meal_amount: f64,
    pub unit: String,
    pub kcal: f64,
    pub deviation_kcal: f64,
    pub deviation_pct: f64,
    /// 1.0 whole, 0.9 half, 0.8 quarter (dry only), else 0.7.
    pub practicality: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPlanKind {
    Single,
    Combo,
}

/// One food's share of a meal-plan option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPortion {
    pub food_id: String,
    pub food_name: String,
    pub form: FoodForm,
    pub daily_amount: f64,
    pub per_meal_amount: f64,
    pub unit: String,
    pub kcal: f64,
}

/// A feasible daily feeding option built from one or two foods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanOption {
    pub kind: MealPlanKind,
    pub portions: Vec<PlanPortion>,
    pub total_kcal: f64,
    pub target_kcal: f64,
    pub deviation_kcal: f64,
    pub deviation_pct: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
    pub note: String,
    pub rank: usize,
}

/// A caller-chosen food and how many of the daily meals it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSelection {
    pub food_id: String,
    pub meal_count: u32,
}

impl FoodSelection {
    pub fn new(food_id: impl Into<String>, meal_count: u32) -> Self {
        Self {
            food_id: food_id.into(),
            meal_count,
        }
    }
}

/// Per-food line of a multi-food plan summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFoodSummary {
    pub food_id: String,
    pub food_name: String,
    pub form: FoodForm,
    pub unit: String,
    pub meal_count: u32,
    pub daily_amount: f64,
    pub per_meal_amount: f64,
    pub kcal: f64,
    pub daily_cost: f64,
    pub monthly_cost: f64,
}

/// Aggregate view of a multi-food plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub foods: Vec<PlanFoodSummary>,
    pub total_kcal: f64,
    pub target_kcal: f64,
    pub difference: f64,
    pub percent_difference: f64,
    pub total_daily_cost: f64,
    pub total_monthly_cost: f64,
    pub is_valid: bool,
    pub message: String,
    pub total_meals_used: u32,
}

/// A completed multi-food plan with the energy target it was built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub name: String,
    pub target_kcal: f64,
    pub meals_per_day: u32,
    pub selections: Vec<FoodSelection>,
}

/// Energy delivered by the profile's current feeding versus its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentFeedingReport {
    pub portions: Vec<PlanPortion>,
    pub total_kcal: f64,
    pub target_kcal: f64,
    pub deviation_kcal: f64,
    pub deviation_pct: f64,
    pub daily_cost: f64,
    pub note: String,
}
