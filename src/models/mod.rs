mod food;
mod plan;
mod profile;
mod recommendation;

#[cfg(test)]
pub(crate) use food::fixtures as food_fixtures;
#[cfg(test)]
pub(crate) use profile::fixtures as profile_fixtures;

pub use food::{FoodForm, FoodItem, LifeStage};
pub use plan::{
    CurrentFeedingReport, FoodSelection, MealPlanKind, MealPlanOption, NutritionPlan,
    PlanFoodSummary, PlanPortion, PlanSummary, PortionOption, SavedPlan,
};
pub use profile::{
    ActivityLevel, AgeBracket, CatProfile, CurrentFeeding, ReproductiveStatus, Sex, WeightGoal,
};
pub use recommendation::{Badge, FoodRecommendation, RecommendationScore, ScoreBreakdown};
