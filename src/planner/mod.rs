pub mod aggregate;
pub mod badges;
pub mod compatibility;
pub mod config;
pub mod constants;
pub mod cost;
pub mod current;
pub mod energy;
pub mod meal_plan;
pub mod portions;
pub mod recommend;
pub mod rounding;
pub mod scoring;

pub use aggregate::aggregate_multi_food_plan;
pub use badges::assign_badges;
pub use compatibility::{check_health_compatibility, is_life_stage_appropriate, HealthCompatibility};
pub use config::{PlannerConfig, ScoringWeights};
pub use constants::*;
pub use cost::{cost_per_100kcal, cost_per_serving, daily_amount, daily_cost, monthly_cost};
pub use current::evaluate_current_feeding;
pub use energy::{
    compute_nutrition_plan, daily_energy_requirement, life_stage_factor,
    recommended_meals_per_day, resting_energy_requirement, weight_kg,
};
pub use meal_plan::{generate_meal_plan_options, suitability_note};
pub use portions::{
    generate_portion_options, practicality_score, practical_increment, round_down_practical,
    round_to_practical, round_up_practical,
};
pub use recommend::{generate_recommendations, FormPreference, RecommendationOptions};
pub use scoring::{
    dry_matter_protein, nutrition_points, score_food, suitability_points, value_score, CostRange,
};
