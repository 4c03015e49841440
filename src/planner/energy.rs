use crate::models::{ActivityLevel, CatProfile, NutritionPlan, WeightGoal};
use crate::planner::constants::*;
use crate::planner::rounding;

/// Convert pounds to kilograms.
#[inline]
pub fn weight_kg(weight_lbs: f64) -> f64 {
    weight_lbs / LBS_PER_KG
}

/// Resting energy requirement: 70 * kg^0.75.
#[inline]
pub fn resting_energy_requirement(weight_kg: f64) -> f64 {
    RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT)
}

/// Life-stage factor and its label.
///
/// Priority: kitten, weight loss, inactive, active, altered, intact.
pub fn life_stage_factor(profile: &CatProfile) -> (f64, &'static str) {
    if profile.is_kitten() {
        (KITTEN_FACTOR, "Kitten, growing")
    } else if profile.weight_goal == WeightGoal::Lose {
        (WEIGHT_LOSS_FACTOR, "Weight loss")
    } else if profile.activity_level == ActivityLevel::Inactive {
        (INACTIVE_FACTOR, "Inactive adult")
    } else if profile.activity_level == ActivityLevel::Active {
        (ACTIVE_FACTOR, "Active adult")
    } else if profile.is_altered() {
        (ALTERED_FACTOR, "Neutered/spayed adult")
    } else {
        (INTACT_FACTOR, "Intact adult")
    }
}

/// Unrounded daily energy requirement for internal use.
pub fn daily_energy_requirement(profile: &CatProfile) -> f64 {
    let rer = resting_energy_requirement(weight_kg(profile.weight_lbs));
    let (factor, _) = life_stage_factor(profile);
    rer * factor
}

/// Recommended number of meals per day.
pub fn recommended_meals_per_day(profile: &CatProfile) -> u32 {
    if profile.is_kitten() {
        KITTEN_MEALS_PER_DAY
    } else if profile.weight_goal == WeightGoal::Lose {
        WEIGHT_LOSS_MEALS_PER_DAY
    } else {
        profile.meals_per_day.unwrap_or(DEFAULT_MEALS_PER_DAY)
    }
}

/// Compute the nutrition plan for a profile.
///
/// Energies are rounded to whole kcal here and nowhere earlier.
pub fn compute_nutrition_plan(profile: &CatProfile) -> NutritionPlan {
    let rer = resting_energy_requirement(weight_kg(profile.weight_lbs));
    let (factor, label) = life_stage_factor(profile);
    let der = rer * factor;

    NutritionPlan {
        rer: rounding::kcal(rer),
        der: rounding::kcal(der),
        life_stage_factor: factor,
        factor_label: label.to_string(),
        treat_kcal: rounding::kcal(der * TREAT_FRACTION),
        meals_per_day: recommended_meals_per_day(profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile_fixtures::adult_cat;
    use crate::models::ReproductiveStatus;

    #[test]
    fn test_rer_formula() {
        let kg = weight_kg(10.0);
        assert!((kg - 4.5359).abs() < 0.001);
        let rer = resting_energy_requirement(kg);
        assert!((rer - 70.0 * kg.powf(0.75)).abs() < 1e-12);
        assert!((rer - 217.6).abs() < 0.1);
    }

    #[test]
    fn test_zero_weight_gives_zero_rer() {
        let plan = compute_nutrition_plan(&adult_cat(0.0));
        assert_eq!(plan.rer, 0.0);
        assert_eq!(plan.der, 0.0);
    }

    #[test]
    fn test_factor_priority() {
        let mut cat = adult_cat(10.0);
        assert_eq!(life_stage_factor(&cat).0, ALTERED_FACTOR);

        cat.reproductive_status = ReproductiveStatus::Intact;
        assert_eq!(life_stage_factor(&cat).0, INTACT_FACTOR);

        cat.activity_level = ActivityLevel::Active;
        assert_eq!(life_stage_factor(&cat).0, ACTIVE_FACTOR);

        cat.activity_level = ActivityLevel::Inactive;
        assert_eq!(life_stage_factor(&cat).0, INACTIVE_FACTOR);

        // Weight loss beats activity
        cat.weight_goal = WeightGoal::Lose;
        assert_eq!(life_stage_factor(&cat), (WEIGHT_LOSS_FACTOR, "Weight loss"));

        // Kitten beats everything
        cat.age_months = 6;
        assert_eq!(life_stage_factor(&cat), (KITTEN_FACTOR, "Kitten, growing"));
    }

    #[test]
    fn test_meals_per_day() {
        let mut cat = adult_cat(10.0);
        assert_eq!(recommended_meals_per_day(&cat), DEFAULT_MEALS_PER_DAY);

        cat.meals_per_day = Some(3);
        assert_eq!(recommended_meals_per_day(&cat), 3);

        cat.meals_per_day = Some(1);
        cat.weight_goal = WeightGoal::Lose;
        assert_eq!(recommended_meals_per_day(&cat), WEIGHT_LOSS_MEALS_PER_DAY);

        cat.age_months = 4;
        assert_eq!(recommended_meals_per_day(&cat), KITTEN_MEALS_PER_DAY);
    }

    #[test]
    fn test_plan_rounds_only_at_boundary() {
        let cat = adult_cat(10.0);
        let plan = compute_nutrition_plan(&cat);
        let der = daily_energy_requirement(&cat);

        assert_eq!(plan.der, der.round());
        assert_eq!(plan.der, 261.0);
        // Treats come from the unrounded DER
        assert_eq!(plan.treat_kcal, (der * 0.1).round());
        assert_eq!(plan.factor_label, "Neutered/spayed adult");
    }
}
