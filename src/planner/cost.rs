use crate::models::FoodItem;
use crate::planner::constants::DAYS_PER_MONTH;

/// Cost per 100 kcal of a food.
///
/// Returns `f64::INFINITY` when the package carries no energy; such foods
/// must be filtered out before ranking.
pub fn cost_per_100kcal(food: &FoodItem) -> f64 {
    let total_energy = food.package_energy();
    if total_energy <= 0.0 {
        return f64::INFINITY;
    }
    (food.price / total_energy) * 100.0
}

/// Price of one serving (cup or can).
pub fn cost_per_serving(food: &FoodItem) -> f64 {
    if food.servings_per_package > 0.0 {
        food.price / food.servings_per_package
    } else {
        0.0
    }
}

/// Daily cost of feeding `daily_kcal` at a given cost per 100 kcal.
#[inline]
pub fn daily_cost(daily_kcal: f64, cost_per_100kcal: f64) -> f64 {
    daily_kcal * (cost_per_100kcal / 100.0)
}

#[inline]
pub fn monthly_cost(daily_cost: f64) -> f64 {
    daily_cost * DAYS_PER_MONTH
}

/// Servings per day needed to deliver `target_kcal`.
///
/// `None` for foods with no energy density.
pub fn daily_amount(target_kcal: f64, food: &FoodItem) -> Option<f64> {
    let kcal = food.energy_per_serving();
    (kcal > 0.0).then(|| target_kcal / kcal)
}
