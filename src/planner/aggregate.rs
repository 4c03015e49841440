use tracing::warn;

use crate::models::{FoodItem, FoodSelection, PlanFoodSummary, PlanSummary, SavedPlan};
use crate::planner::config::PlannerConfig;
use crate::planner::cost;
use crate::planner::rounding;

/// Status message for a plan's fill state.
fn status_message(
    usable: usize,
    meals_used: u32,
    meals_per_day: u32,
    percent_difference: f64,
    config: &PlannerConfig,
) -> String {
    if usable == 0 {
        return "Select foods to build a plan".to_string();
    }
    if meals_used < meals_per_day {
        let left = meals_per_day - meals_used;
        let noun = if left == 1 { "slot" } else { "slots" };
        return format!("{} meal {} remaining", left, noun);
    }
    if meals_used > meals_per_day {
        let over = meals_used - meals_per_day;
        let noun = if over == 1 { "meal" } else { "meals" };
        return format!("{} {} over the daily count", over, noun);
    }
    if percent_difference.abs() > config.max_deviation_pct {
        return format!("Plan is {:.1}% off the daily target", percent_difference);
    }
    "All slots filled".to_string()
}

/// Summarize a multi-food plan.
///
/// Each food covers `meal_count / total meals` of the target energy. The plan
/// is valid only when the meal counts fill the day exactly and the total
/// stays within the deviation bound. Unknown food ids are skipped.
pub fn aggregate_multi_food_plan(
    selections: &[FoodSelection],
    catalog: &[FoodItem],
    target_kcal: f64,
    meals_per_day: u32,
    config: &PlannerConfig,
) -> PlanSummary {
    let resolved: Vec<(&FoodSelection, &FoodItem)> = selections
        .iter()
        .filter(|s| s.meal_count > 0)
        .filter_map(|s| match catalog.iter().find(|f| f.id == s.food_id) {
            Some(food) => Some((s, food)),
            None => {
                warn!(food_id = %s.food_id, "skipping selection for unknown food");
                None
            }
        })
        .collect();

    let meals_used: u32 = resolved.iter().map(|(s, _)| s.meal_count).sum();

    let mut total_kcal = 0.0;
    let mut total_daily_cost = 0.0;
    let foods: Vec<PlanFoodSummary> = resolved
        .iter()
        .map(|(selection, food)| {
            let share = selection.meal_count as f64 / meals_used as f64;
            let share_kcal = share * target_kcal;

            // Zero-density foods deliver nothing and cost nothing
            let daily_amount = cost::daily_amount(share_kcal, food).unwrap_or(0.0);
            let kcal = daily_amount * food.energy_per_serving();
            let daily_cost = daily_amount * cost::cost_per_serving(food);

            total_kcal += kcal;
            total_daily_cost += daily_cost;

            PlanFoodSummary {
                food_id: food.id.clone(),
                food_name: food.display_name(),
                form: food.form,
                unit: food.unit().to_string(),
                meal_count: selection.meal_count,
                daily_amount: rounding::amount(daily_amount),
                per_meal_amount: rounding::amount(daily_amount / selection.meal_count as f64),
                kcal: rounding::kcal(kcal),
                daily_cost: rounding::money(daily_cost),
                monthly_cost: rounding::money(cost::monthly_cost(daily_cost)),
            }
        })
        .collect();

    let difference = total_kcal - target_kcal;
    let percent_difference = if target_kcal > 0.0 {
        difference / target_kcal * 100.0
    } else {
        0.0
    };

    let is_valid = !foods.is_empty()
        && meals_used == meals_per_day
        && percent_difference.abs() <= config.max_deviation_pct;

    PlanSummary {
        message: status_message(
            foods.len(),
            meals_used,
            meals_per_day,
            percent_difference,
            config,
        ),
        foods,
        total_kcal: rounding::kcal(total_kcal),
        target_kcal: rounding::kcal(target_kcal),
        difference: rounding::kcal(difference),
        percent_difference: rounding::percent(percent_difference),
        total_daily_cost: rounding::money(total_daily_cost),
        total_monthly_cost: rounding::money(cost::monthly_cost(total_daily_cost)),
        is_valid,
        total_meals_used: meals_used,
    }
}

impl SavedPlan {
    /// Summarize against the plan's own stored target, not a live profile.
    pub fn summarize(&self, catalog: &[FoodItem], config: &PlannerConfig) -> PlanSummary {
        aggregate_multi_food_plan(
            &self.selections,
            catalog,
            self.target_kcal,
            self.meals_per_day,
            config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food_fixtures::{dry_food, wet_food};
    use assert_float_eq::*;

    fn catalog() -> Vec<FoodItem> {
        vec![dry_food("d1", 400.0, 28.0), wet_food("w1", 80.0, 24.0)]
    }

    #[test]
    fn test_shares_split_by_meal_count() {
        let selections = vec![FoodSelection::new("d1", 2), FoodSelection::new("w1", 1)];
        let summary =
            aggregate_multi_food_plan(&selections, &catalog(), 240.0, 3, &PlannerConfig::default());

        assert!(summary.is_valid);
        assert_eq!(summary.message, "All slots filled");
        assert_eq!(summary.total_meals_used, 3);
        assert_eq!(summary.total_kcal, 240.0);
        assert_eq!(summary.difference, 0.0);

        let dry = &summary.foods[0];
        assert_eq!(dry.kcal, 160.0);
        assert_eq!(dry.daily_amount, 0.4);
        assert_eq!(dry.per_meal_amount, 0.2);

        let wet = &summary.foods[1];
        assert_eq!(wet.kcal, 80.0);
        assert_eq!(wet.daily_amount, 1.0);
        assert_eq!(wet.per_meal_amount, 1.0);

        // 0.4 cup at $1/cup + 1 can at $1/can
        assert_float_absolute_eq!(summary.total_daily_cost, 1.4, 1e-9);
        assert_float_absolute_eq!(summary.total_monthly_cost, 42.0, 1e-9);
    }

    #[test]
    fn test_partial_fill_is_invalid() {
        let selections = vec![FoodSelection::new("d1", 1)];
        let summary =
            aggregate_multi_food_plan(&selections, &catalog(), 240.0, 3, &PlannerConfig::default());

        // Energy is on target but slots remain
        assert_eq!(summary.total_kcal, 240.0);
        assert!(!summary.is_valid);
        assert_eq!(summary.message, "2 meal slots remaining");
    }

    #[test]
    fn test_overfill_is_invalid() {
        let selections = vec![FoodSelection::new("d1", 2), FoodSelection::new("w1", 2)];
        let summary =
            aggregate_multi_food_plan(&selections, &catalog(), 240.0, 3, &PlannerConfig::default());
        assert!(!summary.is_valid);
        assert_eq!(summary.message, "1 meal over the daily count");
    }

    #[test]
    fn test_empty_and_unknown_selections() {
        let config = PlannerConfig::default();
        let summary = aggregate_multi_food_plan(&[], &catalog(), 240.0, 2, &config);
        assert!(!summary.is_valid);
        assert_eq!(summary.message, "Select foods to build a plan");
        assert_eq!(summary.total_meals_used, 0);

        let selections = vec![FoodSelection::new("ghost", 2)];
        let summary = aggregate_multi_food_plan(&selections, &catalog(), 240.0, 2, &config);
        assert!(summary.foods.is_empty());
        assert!(!summary.is_valid);
    }

    #[test]
    fn test_zero_energy_food_misses_target() {
        let mut broth = wet_food("broth", 80.0, 12.0);
        broth.kcal_per_can = Some(0.0);
        let mut foods = catalog();
        foods.push(broth);

        let selections = vec![FoodSelection::new("d1", 1), FoodSelection::new("broth", 1)];
        let summary =
            aggregate_multi_food_plan(&selections, &foods, 240.0, 2, &PlannerConfig::default());

        assert_eq!(summary.total_kcal, 120.0);
        assert_eq!(summary.percent_difference, -50.0);
        assert!(!summary.is_valid);
        assert_eq!(summary.message, "Plan is -50.0% off the daily target");
    }

    #[test]
    fn test_saved_plan_uses_stored_target() {
        let plan = SavedPlan {
            name: "weekday".to_string(),
            target_kcal: 200.0,
            meals_per_day: 2,
            selections: vec![FoodSelection::new("d1", 1), FoodSelection::new("w1", 1)],
        };
        let summary = plan.summarize(&catalog(), &PlannerConfig::default());
        assert_eq!(summary.target_kcal, 200.0);
        assert_eq!(summary.total_kcal, 200.0);
        assert!(summary.is_valid);
    }
}
