pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_recommendations_csv;
pub use prompts::{
    build_plan_interactively, match_foods, prompt_food, prompt_meal_count, prompt_yes_no,
};
pub use render::{
    display_current_feeding, display_meal_plan_options, display_nutrition_plan,
    display_plan_summary, display_portion_options, display_recommendations,
};
