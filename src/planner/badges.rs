use crate::models::{Badge, FoodRecommendation};
use crate::planner::constants::BUDGET_PICK_FRACTION;

/// Index of the first item holding the maximum key.
fn first_max_by_key<T>(items: &[T], key: impl Fn(&T) -> u32) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, item) in items.iter().enumerate() {
        let k = key(item);
        if best.is_none_or(|(_, b)| k > b) {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}

/// Label a scored batch with superlative badges.
///
/// Order matters: best value, best nutrition, best match, then budget
/// picks for still-unbadged foods in the cheapest quarter. Ties go to the
/// first item in batch order.
///
/// `costs_per_100kcal` holds each item's unrounded cost, aligned with `batch`.
pub fn assign_badges(
    batch: &mut [FoodRecommendation],
    costs_per_100kcal: &[f64],
    budget_pick_min_score: u32,
) {
    debug_assert_eq!(batch.len(), costs_per_100kcal.len());

    let Some(best_value) = first_max_by_key(batch, |r| r.score.value) else {
        return;
    };
    batch[best_value].badges.push(Badge::BestValue);

    let best_nutrition = first_max_by_key(batch, |r| r.score.nutrition);
    if let Some(i) = best_nutrition.filter(|&i| i != best_value) {
        batch[i].badges.push(Badge::BestNutrition);
    }

    if let Some(i) = first_max_by_key(batch, |r| r.score.overall) {
        let holds_superlative = batch[i].has_badge(Badge::BestValue)
            || batch[i].has_badge(Badge::BestNutrition);
        if !holds_superlative {
            batch[i].badges.push(Badge::BestMatch);
        }
    }

    // Cheapest quarter by cost per 100 kcal, rounded up
    let quota = (batch.len() as f64 * BUDGET_PICK_FRACTION).ceil() as usize;
    let mut by_cost: Vec<usize> = (0..batch.len()).collect();
    by_cost.sort_by(|&a, &b| costs_per_100kcal[a].total_cmp(&costs_per_100kcal[b]));

    for &i in by_cost.iter().take(quota) {
        let rec = &mut batch[i];
        if rec.badges.is_empty() && rec.score.overall >= budget_pick_min_score {
            rec.badges.push(Badge::BudgetPick);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food_fixtures::dry_food;
    use crate::models::{RecommendationScore, ScoreBreakdown};
    use crate::planner::constants::BUDGET_PICK_MIN_SCORE;

    fn rec(id: &str, overall: u32, nutrition: u32, value: u32, cpk: f64) -> FoodRecommendation {
        FoodRecommendation {
            food: dry_food(id, 400.0, 30.0),
            daily_amount: 0.75,
            per_meal_amount: 0.38,
            daily_cost: 0.8,
            monthly_cost: 24.0,
            cost_per_100kcal: cpk,
            score: RecommendationScore {
                overall,
                nutrition,
                value,
                suitability: 80,
                breakdown: ScoreBreakdown::default(),
            },
            badges: Vec::new(),
        }
    }

    fn assign(batch: &mut [FoodRecommendation]) {
        let costs: Vec<f64> = batch.iter().map(|r| r.cost_per_100kcal).collect();
        assign_badges(batch, &costs, BUDGET_PICK_MIN_SCORE);
    }

    fn badged(batch: &[FoodRecommendation], badge: Badge) -> Vec<String> {
        batch
            .iter()
            .filter(|r| r.has_badge(badge))
            .map(|r| r.food.id.clone())
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        let mut batch: Vec<FoodRecommendation> = Vec::new();
        assign(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_distinct_superlatives() {
        let mut batch = vec![
            rec("a", 85, 90, 40, 0.40),
            rec("b", 80, 60, 100, 0.20),
            rec("c", 90, 70, 60, 0.30),
            rec("d", 60, 50, 20, 0.50),
        ];
        assign(&mut batch);

        assert_eq!(badged(&batch, Badge::BestValue), vec!["b"]);
        assert_eq!(badged(&batch, Badge::BestNutrition), vec!["a"]);
        assert_eq!(badged(&batch, Badge::BestMatch), vec!["c"]);
        // Cheapest quarter is "b", which already holds a badge
        assert!(badged(&batch, Badge::BudgetPick).is_empty());
    }

    #[test]
    fn test_best_nutrition_skipped_when_same_as_value() {
        let mut batch = vec![rec("a", 90, 95, 100, 0.2), rec("b", 70, 60, 50, 0.3)];
        assign(&mut batch);

        assert_eq!(batch[0].badges, vec![Badge::BestValue]);
        assert!(badged(&batch, Badge::BestNutrition).is_empty());
        // Top overall already holds best value
        assert!(badged(&batch, Badge::BestMatch).is_empty());
    }

    #[test]
    fn test_ties_go_to_first() {
        let mut batch = vec![rec("a", 80, 70, 90, 0.3), rec("b", 80, 70, 90, 0.3)];
        assign(&mut batch);
        assert_eq!(badged(&batch, Badge::BestValue), vec!["a"]);
    }

    #[test]
    fn test_budget_pick_for_unbadged_cheap_food() {
        let mut batch = vec![
            rec("top", 95, 95, 50, 0.50),
            rec("cheap", 75, 60, 99, 0.21),
            rec("value", 70, 50, 100, 0.20),
            rec("mid", 72, 65, 70, 0.30),
            rec("pricey", 65, 55, 10, 0.60),
        ];
        assign(&mut batch);

        // Quota ceil(5 * 0.25) = 2: "value" (badged) and "cheap"
        assert_eq!(badged(&batch, Badge::BestValue), vec!["value"]);
        assert_eq!(badged(&batch, Badge::BestNutrition), vec!["top"]);
        assert_eq!(badged(&batch, Badge::BudgetPick), vec!["cheap"]);
    }

    #[test]
    fn test_budget_pick_requires_min_score() {
        let mut batch = vec![
            rec("top", 95, 95, 100, 0.50),
            rec("cheap", 60, 60, 90, 0.10),
        ];
        assign(&mut batch);
        assert!(badged(&batch, Badge::BudgetPick).is_empty());
    }

    #[test]
    fn test_budget_pick_orders_on_unrounded_cost() {
        let mut batch = vec![
            rec("top", 95, 95, 100, 0.50),
            rec("x", 75, 60, 50, 0.25),
            rec("y", 75, 60, 50, 0.25),
            rec("z", 60, 50, 40, 0.60),
        ];
        // Both show 0.25 per 100 kcal, but "y" is cheaper before rounding
        assign_badges(&mut batch, &[0.50, 0.2549, 0.2451, 0.60], BUDGET_PICK_MIN_SCORE);

        assert_eq!(badged(&batch, Badge::BestValue), vec!["top"]);
        assert_eq!(badged(&batch, Badge::BudgetPick), vec!["y"]);
    }
}
