use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::models::{CatProfile, FoodItem, SavedPlan};

/// Load a food catalog from a JSON file.
///
/// Deduplicates by id (last occurrence wins) while keeping first-seen order,
/// so ranking ties stay stable.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodItem> = serde_json::from_str(&content)?;

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<FoodItem> = Vec::with_capacity(foods.len());
    for food in foods {
        if !food.is_valid() {
            warn!(food_id = %food.id, "catalog entry fails validation");
        }
        match index.get(&food.id) {
            Some(&i) => deduped[i] = food,
            None => {
                index.insert(food.id.clone(), deduped.len());
                deduped.push(food);
            }
        }
    }

    Ok(deduped)
}

/// Load a cat profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<CatProfile> {
    let content = fs::read_to_string(path)?;
    let profile: CatProfile = serde_json::from_str(&content)?;
    if !profile.is_valid() {
        return Err(PlannerError::InvalidInput(format!(
            "Profile '{}' needs a positive weight and meal count",
            profile.name
        )));
    }
    Ok(profile)
}

/// Load a saved plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<SavedPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a plan to a JSON file. Only complete plans can be saved.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &SavedPlan) -> Result<()> {
    let used: u32 = plan.selections.iter().map(|s| s.meal_count).sum();
    if used != plan.meals_per_day {
        return Err(PlannerError::IncompletePlan(format!(
            "{} of {} meals assigned",
            used, plan.meals_per_day
        )));
    }

    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
