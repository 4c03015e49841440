use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::interface::render::display_plan_summary;
use crate::models::FoodItem;
use crate::planner::config::PlannerConfig;
use crate::state::PlanBuilder;

/// Minimum Jaro-Winkler similarity for a fuzzy food match.
const FUZZY_THRESHOLD: f64 = 0.7;
const MAX_CANDIDATES: usize = 5;

/// Foods whose id or display name resemble `query`, best match first.
///
/// An exact (case-insensitive) id or name match is returned alone.
pub fn match_foods<'a>(query: &str, catalog: &'a [FoodItem]) -> Vec<&'a FoodItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(food) = catalog.iter().find(|f| {
        f.id.to_lowercase() == query
            || f.name.to_lowercase() == query
            || f.display_name().to_lowercase() == query
    }) {
        return vec![food];
    }

    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .iter()
        .map(|f| {
            let by_name = jaro_winkler(&f.name.to_lowercase(), &query);
            let by_display = jaro_winkler(&f.display_name().to_lowercase(), &query);
            (f, by_name.max(by_display))
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
        .into_iter()
        .take(MAX_CANDIDATES)
        .map(|(f, _)| f)
        .collect()
}

/// Prompt for a food by name, resolving typos through fuzzy matching.
///
/// Returns `None` when the user enters nothing.
pub fn prompt_food<'a>(catalog: &'a [FoodItem]) -> Result<Option<&'a FoodItem>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Food name or id (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let candidates = match_foods(input, catalog);
        match candidates.len() {
            0 => println!("No matching food found for '{}'", input),
            1 => {
                let food = candidates[0];
                if food.id.eq_ignore_ascii_case(input) || food.name.eq_ignore_ascii_case(input) {
                    return Ok(Some(food));
                }
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", food.display_name()))
                    .default(true)
                    .interact()?;
                if confirm {
                    return Ok(Some(food));
                }
            }
            _ => {
                let mut items: Vec<String> =
                    candidates.iter().map(|f| f.display_name()).collect();
                items.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&items)
                    .default(0)
                    .interact()?;

                if selection < candidates.len() {
                    return Ok(Some(candidates[selection]));
                }
            }
        }
    }
}

/// Prompt for how many daily meals a food covers.
pub fn prompt_meal_count(food_name: &str, remaining: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "How many meals of {} ({} remaining)?",
            food_name, remaining
        ))
        .default(remaining.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fill a plan interactively until every meal slot is assigned or the user
/// stops. Invalid meal counts are reported and re-asked.
pub fn build_plan_interactively(
    builder: &mut PlanBuilder,
    catalog: &[FoodItem],
    config: &PlannerConfig,
) -> Result<()> {
    while !builder.is_complete() {
        println!(
            "{} of {} meals assigned",
            builder.meals_used(),
            builder.meals_per_day()
        );

        let Some(food) = prompt_food(catalog)? else {
            break;
        };

        let count = match prompt_meal_count(&food.display_name(), builder.remaining_slots()) {
            Ok(count) => count,
            Err(PlannerError::InvalidInput(msg)) => {
                println!("{}", msg);
                continue;
            }
            Err(e) => return Err(e),
        };

        match builder.add(&food.id, count) {
            Ok(()) => println!("Added: {} x{}", food.display_name(), count),
            Err(PlannerError::InvalidInput(msg)) => println!("{}", msg),
            Err(e) => return Err(e),
        }

        display_plan_summary(&builder.summary(catalog, config));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food_fixtures::{dry_food, wet_food};

    fn catalog() -> Vec<FoodItem> {
        let mut salmon = dry_food("d1", 400.0, 28.0);
        salmon.name = "Salmon Recipe".to_string();
        let mut chicken = dry_food("d2", 380.0, 25.0);
        chicken.name = "Chicken Recipe".to_string();
        let mut pate = wet_food("w1", 80.0, 24.0);
        pate.name = "Turkey Pate".to_string();
        vec![salmon, chicken, pate]
    }

    #[test]
    fn test_exact_match_by_id_or_name() {
        let foods = catalog();
        let by_id = match_foods("W1", &foods);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "w1");

        let by_name = match_foods("salmon recipe", &foods);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "d1");
    }

    #[test]
    fn test_fuzzy_match_ranks_closest_first() {
        let foods = catalog();
        let matches = match_foods("Salmon Recpie", &foods);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].id, "d1");
    }

    #[test]
    fn test_no_match() {
        let foods = catalog();
        assert!(match_foods("", &foods).is_empty());
        assert!(match_foods("zzzzzzzz", &foods).is_empty());
    }
}
