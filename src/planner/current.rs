use tracing::warn;

use crate::models::{CatProfile, CurrentFeedingReport, FoodItem, PlanPortion};
use crate::planner::cost;
use crate::planner::energy::{daily_energy_requirement, recommended_meals_per_day};
use crate::planner::meal_plan::suitability_note;
use crate::planner::rounding;

/// Compare what the cat eats today against its energy target.
///
/// Returns `None` when the profile records no current feeding or none of
/// its foods are in the catalog.
pub fn evaluate_current_feeding(
    profile: &CatProfile,
    catalog: &[FoodItem],
) -> Option<CurrentFeedingReport> {
    let feeding = profile.current_feeding.as_ref()?;
    let target = daily_energy_requirement(profile);
    let meals = recommended_meals_per_day(profile).max(1) as f64;

    let stored = [
        (
            feeding.primary_food_id.as_deref(),
            feeding.primary_daily_amount,
        ),
        (
            feeding.secondary_food_id.as_deref(),
            feeding.secondary_daily_amount,
        ),
    ];

    let parts: Vec<(&FoodItem, f64)> = stored
        .into_iter()
        .filter_map(|(id, amount)| {
            let id = id?;
            match catalog.iter().find(|f| f.id == id) {
                Some(food) => Some((food, amount.max(0.0))),
                None => {
                    warn!(food_id = id, "current feeding references unknown food");
                    None
                }
            }
        })
        .collect();

    if parts.is_empty() {
        return None;
    }

    let total_kcal: f64 = parts
        .iter()
        .map(|(food, amount)| amount * food.energy_per_serving())
        .sum();
    let daily_cost: f64 = parts
        .iter()
        .map(|(food, amount)| amount * cost::cost_per_serving(food))
        .sum();
    let deviation = total_kcal - target;
    let deviation_pct = if target > 0.0 {
        deviation / target * 100.0
    } else {
        0.0
    };

    Some(CurrentFeedingReport {
        portions: parts
            .iter()
            .map(|(food, amount)| PlanPortion {
                food_id: food.id.clone(),
                food_name: food.display_name(),
                form: food.form,
                daily_amount: rounding::amount(*amount),
                per_meal_amount: rounding::amount(amount / meals),
                unit: food.unit().to_string(),
                kcal: rounding::kcal(amount * food.energy_per_serving()),
            })
            .collect(),
        total_kcal: rounding::kcal(total_kcal),
        target_kcal: rounding::kcal(target),
        deviation_kcal: rounding::kcal(deviation),
        deviation_pct: rounding::percent(deviation_pct),
        daily_cost: rounding::money(daily_cost),
        note: suitability_note(deviation_pct, profile),
    })
}
