use crate::models::{FoodForm, FoodItem, PortionOption};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::{DRY_INCREMENT, WET_INCREMENT};
use crate::planner::rounding;

/// Tolerance for float comparisons on amounts.
const EPSILON: f64 = 1e-9;

/// Smallest measurable step: quarter cups for dry food, half cans for wet.
#[inline]
pub fn practical_increment(form: FoodForm) -> f64 {
    match form {
        FoodForm::Dry => DRY_INCREMENT,
        FoodForm::Wet => WET_INCREMENT,
    }
}

/// Round to the nearest practical increment.
pub fn round_to_practical(amount: f64, form: FoodForm) -> f64 {
    let inc = practical_increment(form);
    (amount / inc).round() * inc
}

/// Round down to a practical increment.
pub fn round_down_practical(amount: f64, form: FoodForm) -> f64 {
    let inc = practical_increment(form);
    (amount / inc + EPSILON).floor() * inc
}

/// Round up to a practical increment.
pub fn round_up_practical(amount: f64, form: FoodForm) -> f64 {
    let inc = practical_increment(form);
    (amount / inc - EPSILON).ceil() * inc
}

/// How easily an amount maps onto a real measuring increment.
///
/// 1.0 for whole servings, 0.9 for halves, 0.8 for quarters (dry only),
/// otherwise 0.7.
pub fn practicality_score(amount: f64, form: FoodForm) -> f64 {
    let frac = amount.fract().abs();
    let near = |target: f64| (frac - target).abs() < EPSILON;

    if near(0.0) || near(1.0) {
        1.0
    } else if near(0.5) {
        0.9
    } else if form == FoodForm::Dry && (near(0.25) || near(0.75)) {
        0.8
    } else {
        0.7
    }
}

/// Candidate daily amounts of one food within the deviation bound.
///
/// Sweeps practical increments between 80% and 120% of the target (for the
/// default 20% bound), most practical first, then closest to target.
pub fn generate_portion_options(
    food: &FoodItem,
    target_kcal: f64,
    meals_per_day: u32,
    config: &PlannerConfig,
) -> Vec<PortionOption> {
    let kcal_per_unit = food.energy_per_serving();
    if kcal_per_unit <= 0.0 || target_kcal <= 0.0 {
        return Vec::new();
    }

    let inc = practical_increment(food.form);
    let bound = config.max_deviation_pct / 100.0;
    let min_amount = target_kcal * (1.0 - bound) / kcal_per_unit;
    let max_amount = target_kcal * (1.0 + bound) / kcal_per_unit;

    // Integer steps avoid accumulating float error across the sweep
    let first = ((min_amount / inc - EPSILON).ceil() as i64).max(1);
    let last = (max_amount / inc + EPSILON).floor() as i64;
    let meals = meals_per_day.max(1) as f64;

    let mut options: Vec<(PortionOption, f64)> = (first..=last)
        .filter_map(|step| {
            let amount = step as f64 * inc;
            let kcal = amount * kcal_per_unit;
            let deviation = kcal - target_kcal;
            let deviation_pct = deviation / target_kcal * 100.0;
            if deviation_pct.abs() > config.max_deviation_pct + EPSILON {
                return None;
            }
            let option = PortionOption {
                daily_amount: rounding::amount(amount),
                per_meal_amount: rounding::amount(amount / meals),
                unit: food.unit().to_string(),
                kcal: rounding::kcal(kcal),
                deviation_kcal: rounding::kcal(deviation),
                deviation_pct: rounding::percent(deviation_pct),
                practicality: practicality_score(amount, food.form),
            };
            Some((option, deviation.abs()))
        })
        .collect();

    options.sort_by(|(a, a_dev), (b, b_dev)| {
        b.practicality
            .total_cmp(&a.practicality)
            .then(a_dev.total_cmp(b_dev))
    });

    options.into_iter().map(|(option, _)| option).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food_fixtures::{dry_food, wet_food};

    #[test]
    fn test_round_to_practical() {
        assert_eq!(round_to_practical(0.8, FoodForm::Dry), 0.75);
        assert_eq!(round_to_practical(0.9, FoodForm::Dry), 1.0);
        assert_eq!(round_to_practical(1.2, FoodForm::Wet), 1.0);
        assert_eq!(round_to_practical(1.3, FoodForm::Wet), 1.5);
    }

    #[test]
    fn test_round_down_and_up() {
        assert_eq!(round_down_practical(0.99, FoodForm::Dry), 0.75);
        assert_eq!(round_up_practical(0.76, FoodForm::Dry), 1.0);
        assert_eq!(round_down_practical(1.49, FoodForm::Wet), 1.0);
        assert_eq!(round_up_practical(1.01, FoodForm::Wet), 1.5);
        // Already practical amounts are fixed points
        assert_eq!(round_down_practical(0.75, FoodForm::Dry), 0.75);
        assert_eq!(round_up_practical(1.5, FoodForm::Wet), 1.5);
    }

    #[test]
    fn test_rounding_idempotent() {
        for form in [FoodForm::Dry, FoodForm::Wet] {
            for raw in [0.1, 0.33, 0.62, 1.13, 2.87, 3.5] {
                let once = round_to_practical(raw, form);
                assert_eq!(round_to_practical(once, form), once);
            }
        }
    }

    #[test]
    fn test_practicality_score() {
        assert_eq!(practicality_score(1.0, FoodForm::Dry), 1.0);
        assert_eq!(practicality_score(2.0, FoodForm::Wet), 1.0);
        assert_eq!(practicality_score(0.5, FoodForm::Dry), 0.9);
        assert_eq!(practicality_score(1.5, FoodForm::Wet), 0.9);
        assert_eq!(practicality_score(0.75, FoodForm::Dry), 0.8);
        assert_eq!(practicality_score(0.25, FoodForm::Dry), 0.8);
        // Quarters don't count for cans
        assert_eq!(practicality_score(0.75, FoodForm::Wet), 0.7);
        assert_eq!(practicality_score(0.6, FoodForm::Dry), 0.7);
    }

    #[test]
    fn test_exact_quarter_cup_hit() {
        // 300 kcal target at 400 kcal/cup: band is 0.6-0.9 cups
        let food = dry_food("d1", 400.0, 30.0);
        let options = generate_portion_options(&food, 300.0, 2, &PlannerConfig::default());

        assert_eq!(options.len(), 1);
        let only = &options[0];
        assert_eq!(only.daily_amount, 0.75);
        assert_eq!(only.per_meal_amount, 0.38);
        assert_eq!(only.kcal, 300.0);
        assert_eq!(only.deviation_kcal, 0.0);
        assert_eq!(only.practicality, 0.8);
        assert_eq!(only.unit, "cup");
    }

    #[test]
    fn test_options_sorted_by_practicality_then_closeness() {
        // 250 kcal target at 80 kcal/can: band 2.5-3.75 cans -> 2.5, 3.0, 3.5
        let food = wet_food("w1", 80.0, 24.0);
        let options = generate_portion_options(&food, 250.0, 2, &PlannerConfig::default());

        let amounts: Vec<f64> = options.iter().map(|o| o.daily_amount).collect();
        // Halves tie on practicality; 3.5 (+30 kcal) beats 2.5 (-50 kcal)
        assert_eq!(amounts, vec![3.0, 3.5, 2.5]);
        assert_eq!(options[0].practicality, 1.0);
        assert_eq!(options[2].deviation_pct, -20.0);
        assert!(options.iter().all(|o| o.deviation_pct.abs() <= 20.0));
    }

    #[test]
    fn test_zero_energy_or_target_yields_nothing() {
        let mut food = dry_food("d1", 400.0, 30.0);
        let config = PlannerConfig::default();
        assert!(generate_portion_options(&food, 0.0, 2, &config).is_empty());

        food.kcal_per_cup = Some(0.0);
        assert!(generate_portion_options(&food, 300.0, 2, &config).is_empty());
    }
}
