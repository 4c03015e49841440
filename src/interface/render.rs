use crate::models::{
    CatProfile, CurrentFeedingReport, FoodRecommendation, MealPlanKind, MealPlanOption,
    NutritionPlan, PlanSummary, PortionOption,
};
use crate::planner::rounding;

fn signed(value: f64, decimals: usize) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{:.*}", sign, decimals, value)
}

/// Display the daily energy plan for a cat.
pub fn display_nutrition_plan(profile: &CatProfile, plan: &NutritionPlan) {
    println!();
    println!("=== Nutrition Plan: {} ===", profile.name);
    println!();
    println!(
        "Weight: {:.1} lbs | Age: {} months",
        profile.weight_lbs, profile.age_months
    );
    println!("Resting energy (RER): {:.0} kcal/day", plan.rer);
    println!(
        "Life stage factor:    {:.1} ({})",
        plan.life_stage_factor, plan.factor_label
    );
    println!("Daily energy (DER):   {:.0} kcal/day", plan.der);
    println!("Treat allowance:      {:.0} kcal/day", plan.treat_kcal);
    println!("Meals per day:        {}", plan.meals_per_day);
    println!();
}

/// Display ranked food recommendations in a formatted table.
pub fn display_recommendations(recommendations: &[FoodRecommendation]) {
    if recommendations.is_empty() {
        println!("No foods match this profile and these filters.");
        return;
    }

    println!();
    println!("=== Recommendations ({} foods) ===", recommendations.len());
    println!();

    let max_name_len = recommendations
        .iter()
        .map(|r| r.food.display_name().len())
        .max()
        .unwrap_or(10);

    for (i, rec) in recommendations.iter().enumerate() {
        let badges = if rec.badges.is_empty() {
            String::new()
        } else {
            let labels: Vec<&str> = rec.badges.iter().map(|b| b.label()).collect();
            format!("  [{}]", labels.join(", "))
        };

        println!(
            "{:>3}. {:<width$} - score {:>3} (N {:>3} V {:>3} S {:>3}) | {:.2} {}/day | ${:.2}/mo{}",
            i + 1,
            rec.food.display_name(),
            rec.score.overall,
            rec.score.nutrition,
            rec.score.value,
            rec.score.suitability,
            rec.daily_amount,
            rec.food.unit(),
            rec.monthly_cost,
            badges,
            width = max_name_len
        );
    }

    println!();
}

/// Display portion candidates for one food.
pub fn display_portion_options(food_name: &str, options: &[PortionOption]) {
    if options.is_empty() {
        println!("No practical portions of {} land near the target.", food_name);
        return;
    }

    println!();
    println!("=== Portions: {} ===", food_name);
    println!();

    for (i, option) in options.iter().enumerate() {
        println!(
            "{:>3}. {:>5.2} {}/day ({:.2} per meal) - {:>4.0} kcal | {} kcal ({}%) | practicality {:.1}",
            i + 1,
            option.daily_amount,
            option.unit,
            option.per_meal_amount,
            option.kcal,
            signed(option.deviation_kcal, 0),
            signed(option.deviation_pct, 1),
            option.practicality
        );
    }

    println!();
}

/// Display ranked single-food and combo feeding options.
pub fn display_meal_plan_options(options: &[MealPlanOption]) {
    if options.is_empty() {
        println!("No meal plan options for this food.");
        return;
    }

    println!();
    println!("=== Meal Plan Options ===");

    for option in options {
        let kind = match option.kind {
            MealPlanKind::Single => "Single",
            MealPlanKind::Combo => "Combo",
        };
        println!();
        println!(
            "#{} {} - {:.0} / {:.0} kcal ({}%) | ${:.2}/day, ${:.2}/mo",
            option.rank,
            kind,
            option.total_kcal,
            option.target_kcal,
            signed(option.deviation_pct, 1),
            option.daily_cost,
            option.monthly_cost
        );
        for portion in &option.portions {
            println!(
                "     {} - {:.2} {}/day ({:.2} per meal), {:.0} kcal",
                portion.food_name,
                portion.daily_amount,
                portion.unit,
                portion.per_meal_amount,
                portion.kcal
            );
        }
        println!("     {}", option.note);
    }

    println!();
}

/// Display a multi-food plan summary.
pub fn display_plan_summary(summary: &PlanSummary) {
    println!();
    println!("=== Plan Summary ===");
    println!();

    for food in &summary.foods {
        println!(
            "  {} x{} meals - {:.2} {}/day ({:.2} per meal), {:.0} kcal, ${:.2}/day",
            food.food_name,
            food.meal_count,
            food.daily_amount,
            food.unit,
            food.per_meal_amount,
            food.kcal,
            food.daily_cost
        );
    }

    println!();
    println!("--- Totals ---");
    println!("Meals used: {}", summary.total_meals_used);
    println!(
        "Energy: {:.0} / {:.0} kcal ({} kcal, {}%)",
        summary.total_kcal,
        summary.target_kcal,
        signed(summary.difference, 0),
        signed(summary.percent_difference, 1)
    );
    println!(
        "Cost: ${:.2}/day, ${:.2}/mo",
        summary.total_daily_cost, summary.total_monthly_cost
    );
    let status = if summary.is_valid { "OK" } else { "Incomplete" };
    println!("Status: {} - {}", status, summary.message);
    println!();
}

/// Display how the current feeding compares with the target.
pub fn display_current_feeding(report: &CurrentFeedingReport) {
    println!();
    println!("=== Current Feeding ===");
    println!();

    for portion in &report.portions {
        println!(
            "  {} - {:.2} {}/day, {:.0} kcal",
            portion.food_name, portion.daily_amount, portion.unit, portion.kcal
        );
    }

    println!();
    println!(
        "Total: {:.0} kcal vs target {:.0} kcal ({} kcal, {}%)",
        report.total_kcal,
        report.target_kcal,
        signed(report.deviation_kcal, 0),
        signed(rounding::percent(report.deviation_pct), 1)
    );
    println!("Cost: ${:.2}/day", report.daily_cost);
    println!("{}", report.note);
    println!();
}
