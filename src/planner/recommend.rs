use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CatProfile, FoodForm, FoodItem, FoodRecommendation};
use crate::planner::badges::assign_badges;
use crate::planner::compatibility::{check_health_compatibility, is_life_stage_appropriate};
use crate::planner::config::PlannerConfig;
use crate::planner::cost;
use crate::planner::energy::{daily_energy_requirement, recommended_meals_per_day};
use crate::planner::rounding;
use crate::planner::scoring::{score_food, CostRange};

/// Which food forms to consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPreference {
    Dry,
    Wet,
    #[default]
    Any,
}

impl FormPreference {
    pub fn accepts(self, form: FoodForm) -> bool {
        match self {
            FormPreference::Any => true,
            FormPreference::Dry => form == FoodForm::Dry,
            FormPreference::Wet => form == FoodForm::Wet,
        }
    }
}

/// Caller options for a recommendation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOptions {
    pub form_preference: FormPreference,
    /// Drop foods whose monthly cost exceeds this.
    pub max_monthly_budget: Option<f64>,
    /// Overrides the profile's own conditions when set.
    pub health_conditions: Option<Vec<String>>,
}

/// A survivor of filtering, before scoring. Values are unrounded.
struct Candidate<'a> {
    food: &'a FoodItem,
    daily_amount: f64,
    daily_cost: f64,
    monthly_cost: f64,
    cost_per_100kcal: f64,
}

/// Rank catalog foods for a profile.
///
/// Filters by form, life stage, completeness, energy and health
/// compatibility; computes amounts and costs; applies the budget; scores
/// against the survivors' cost spread; sorts by overall score (stable, so
/// catalog order breaks ties); then assigns badges.
///
/// Value scores depend on the whole batch, so results are only comparable
/// within one call.
pub fn generate_recommendations(
    profile: &CatProfile,
    foods: &[FoodItem],
    options: &RecommendationOptions,
    config: &PlannerConfig,
) -> Vec<FoodRecommendation> {
    let target = daily_energy_requirement(profile);
    let meals = recommended_meals_per_day(profile).max(1);
    let conditions: &[String] = options
        .health_conditions
        .as_deref()
        .unwrap_or(&profile.health_conditions);

    let candidates: Vec<Candidate> = foods
        .iter()
        .filter(|f| options.form_preference.accepts(f.form))
        .filter(|f| is_life_stage_appropriate(f, profile))
        .filter(|f| f.complete_and_balanced)
        .filter(|f| f.has_energy())
        .filter(|f| check_health_compatibility(f, conditions).compatible)
        .filter_map(|food| {
            let daily_amount = cost::daily_amount(target, food)?;
            let cost_per_100kcal = cost::cost_per_100kcal(food);
            if !cost_per_100kcal.is_finite() {
                return None;
            }
            let daily_cost = cost::daily_cost(target, cost_per_100kcal);
            Some(Candidate {
                food,
                daily_amount,
                daily_cost,
                monthly_cost: cost::monthly_cost(daily_cost),
                cost_per_100kcal,
            })
        })
        .filter(|c| {
            options
                .max_monthly_budget
                .is_none_or(|budget| c.monthly_cost <= budget)
        })
        .collect();

    debug!(
        catalog = foods.len(),
        survivors = candidates.len(),
        target_kcal = target,
        "filtered recommendation candidates"
    );

    let range = CostRange::from_costs(candidates.iter().map(|c| c.cost_per_100kcal));

    let mut scored: Vec<(FoodRecommendation, f64)> = candidates
        .into_iter()
        .map(|c| {
            let rec = FoodRecommendation {
                food: c.food.clone(),
                daily_amount: rounding::amount(c.daily_amount),
                per_meal_amount: rounding::amount(c.daily_amount / meals as f64),
                daily_cost: rounding::money(c.daily_cost),
                monthly_cost: rounding::money(c.monthly_cost),
                cost_per_100kcal: rounding::money(c.cost_per_100kcal),
                score: score_food(
                    c.food,
                    profile,
                    conditions,
                    c.cost_per_100kcal,
                    range.as_ref(),
                    &config.weights,
                ),
                badges: Vec::new(),
            };
            (rec, c.cost_per_100kcal)
        })
        .collect();

    scored.sort_by(|a, b| b.0.score.overall.cmp(&a.0.score.overall));
    let (mut batch, costs): (Vec<FoodRecommendation>, Vec<f64>) = scored.into_iter().unzip();
    assign_badges(&mut batch, &costs, config.budget_pick_min_score);

    batch
}
