use tracing::debug;

use crate::models::{
    ActivityLevel, CatProfile, FoodItem, MealPlanKind, MealPlanOption, PlanPortion, WeightGoal,
};
use crate::planner::compatibility::{check_health_compatibility, is_life_stage_appropriate};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::SINGLE_OPTION_COUNT;
use crate::planner::cost;
use crate::planner::energy::{daily_energy_requirement, recommended_meals_per_day};
use crate::planner::portions::{generate_portion_options, round_down_practical, round_to_practical};
use crate::planner::rounding;

/// Human-readable verdict on how a plan's energy compares to the target.
pub fn suitability_note(deviation_pct: f64, profile: &CatProfile) -> String {
    let abs = deviation_pct.abs();
    let note = if abs <= 2.0 {
        "Perfectly balanced for daily needs"
    } else if abs <= 3.0 {
        "Excellent match for daily needs"
    } else if deviation_pct > 10.0 {
        match profile.weight_goal {
            WeightGoal::Gain => "Calorie surplus, supports healthy weight gain",
            WeightGoal::Lose => "Calorie surplus, not suited to a weight loss plan",
            WeightGoal::Maintain if profile.activity_level == ActivityLevel::Active => {
                "Calorie surplus, good for active cats"
            }
            WeightGoal::Maintain => "Calorie surplus, good for active cats; watch weight",
        }
    } else if deviation_pct < -10.0 {
        match profile.weight_goal {
            WeightGoal::Lose => "Calorie deficit, supports the weight loss goal",
            WeightGoal::Gain => "Calorie deficit, not suited to weight gain",
            WeightGoal::Maintain => "Calorie deficit, good for weight loss",
        }
    } else if deviation_pct > 0.0 {
        "Slightly above daily needs"
    } else {
        "Slightly below daily needs"
    };
    note.to_string()
}

/// Portion of one food delivering `amount` servings a day.
fn plan_portion(food: &FoodItem, amount: f64, meals: f64) -> PlanPortion {
    PlanPortion {
        food_id: food.id.clone(),
        food_name: food.display_name(),
        form: food.form,
        daily_amount: rounding::amount(amount),
        per_meal_amount: rounding::amount(amount / meals),
        unit: food.unit().to_string(),
        kcal: rounding::kcal(amount * food.energy_per_serving()),
    }
}

/// An option together with the unrounded values it is ranked on.
struct RankedOption {
    option: MealPlanOption,
    deviation_pct: f64,
    daily_cost: f64,
}

/// Assemble an option from (food, amount) parts. Rank is assigned later.
fn build_option(
    kind: MealPlanKind,
    parts: &[(&FoodItem, f64)],
    target_kcal: f64,
    meals: f64,
    profile: &CatProfile,
) -> RankedOption {
    let total_kcal: f64 = parts
        .iter()
        .map(|(food, amount)| amount * food.energy_per_serving())
        .sum();
    let daily_cost: f64 = parts
        .iter()
        .map(|(food, amount)| amount * cost::cost_per_serving(food))
        .sum();
    let deviation = total_kcal - target_kcal;
    let deviation_pct = if target_kcal > 0.0 {
        deviation / target_kcal * 100.0
    } else {
        0.0
    };

    let mut note = suitability_note(deviation_pct, profile);
    if kind == MealPlanKind::Combo {
        note = format!("Wet + dry mix. {}", note);
    }

    let option = MealPlanOption {
        kind,
        portions: parts
            .iter()
            .map(|(food, amount)| plan_portion(food, *amount, meals))
            .collect(),
        total_kcal: rounding::kcal(total_kcal),
        target_kcal: rounding::kcal(target_kcal),
        deviation_kcal: rounding::kcal(deviation),
        deviation_pct: rounding::percent(deviation_pct),
        daily_cost: rounding::money(daily_cost),
        monthly_cost: rounding::money(cost::monthly_cost(daily_cost)),
        note,
        rank: 0,
    };

    RankedOption {
        option,
        deviation_pct,
        daily_cost,
    }
}

/// Best complementary food of the opposite form for an energy gap.
///
/// Only the single best fit is returned; ties go to catalog order.
fn best_complement<'a>(
    primary: &FoodItem,
    profile: &CatProfile,
    catalog: &'a [FoodItem],
    gap_kcal: f64,
) -> Option<(&'a FoodItem, f64)> {
    let wanted = primary.form.opposite();
    let mut best: Option<(&FoodItem, f64, f64)> = None;

    for food in catalog {
        if food.form != wanted
            || food.id == primary.id
            || !food.has_energy()
            || !cost::cost_per_100kcal(food).is_finite()
            || !is_life_stage_appropriate(food, profile)
            || !check_health_compatibility(food, &profile.health_conditions).compatible
        {
            continue;
        }
        let amount = round_to_practical(gap_kcal / food.energy_per_serving(), food.form);
        if amount <= 0.0 {
            continue;
        }
        let miss = (amount * food.energy_per_serving() - gap_kcal).abs();
        if best.is_none_or(|(_, _, best_miss)| miss < best_miss) {
            best = Some((food, amount, miss));
        }
    }

    best.map(|(food, amount, _)| (food, amount))
}

/// Daily feeding options for a chosen primary food.
///
/// Up to three single-food options from the portion sweep, plus at most one
/// wet+dry combo: the primary is rounded down and the best-fitting food of
/// the opposite form fills the remaining gap. Options are ranked with
/// near-target combos first, then by deviation band, then by daily cost.
pub fn generate_meal_plan_options(
    primary: &FoodItem,
    profile: &CatProfile,
    catalog: &[FoodItem],
    max_options: usize,
    config: &PlannerConfig,
) -> Vec<MealPlanOption> {
    let target = daily_energy_requirement(profile);
    let meals_per_day = recommended_meals_per_day(profile);
    let meals = meals_per_day.max(1) as f64;
    let primary_kcal = primary.energy_per_serving();
    if primary_kcal <= 0.0 || target <= 0.0 {
        return Vec::new();
    }

    let mut options: Vec<RankedOption> =
        generate_portion_options(primary, target, meals_per_day, config)
            .into_iter()
            .take(SINGLE_OPTION_COUNT)
            .map(|portion| {
                build_option(
                    MealPlanKind::Single,
                    &[(primary, portion.daily_amount)],
                    target,
                    meals,
                    profile,
                )
            })
            .collect();

    let primary_amount = round_down_practical(target / primary_kcal, primary.form);
    let gap = target - primary_amount * primary_kcal;
    if primary_amount > 0.0 && gap > config.combo_min_gap_kcal {
        if let Some((complement, amount)) = best_complement(primary, profile, catalog, gap) {
            let combo = build_option(
                MealPlanKind::Combo,
                &[(primary, primary_amount), (complement, amount)],
                target,
                meals,
                profile,
            );
            if combo.deviation_pct.abs() <= config.max_deviation_pct {
                options.push(combo);
            } else {
                debug!(
                    complement = %complement.id,
                    deviation_pct = combo.deviation_pct,
                    "discarded combo outside deviation bound"
                );
            }
        }
    }

    let mut ranked = rank_options(options, config);
    ranked.truncate(max_options);
    ranked
}

/// Sort options on their unrounded deviation and cost, then assign ranks 1..N.
fn rank_options(mut options: Vec<RankedOption>, config: &PlannerConfig) -> Vec<MealPlanOption> {
    let priority = |o: &RankedOption| {
        o.option.kind == MealPlanKind::Combo && o.deviation_pct.abs() <= config.combo_priority_pct
    };
    let band = |o: &RankedOption| (o.deviation_pct.abs() / config.ranking_band_pct).floor() as i64;

    options.sort_by(|a, b| {
        priority(b)
            .cmp(&priority(a))
            .then_with(|| band(a).cmp(&band(b)))
            .then_with(|| a.daily_cost.total_cmp(&b.daily_cost))
            .then_with(|| a.deviation_pct.abs().total_cmp(&b.deviation_pct.abs()))
    });

    options
        .into_iter()
        .enumerate()
        .map(|(i, ranked)| MealPlanOption {
            rank: i + 1,
            ..ranked.option
        })
        .collect()
}
