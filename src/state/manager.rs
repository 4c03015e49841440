use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, FoodSelection, PlanSummary, SavedPlan};
use crate::planner::aggregate_multi_food_plan;
use crate::planner::config::PlannerConfig;

/// In-progress "build your own" plan against a fixed number of daily meals.
///
/// Partial fills are allowed while building; only a plan whose meal counts
/// sum exactly to `meals_per_day` can be saved.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    target_kcal: f64,
    meals_per_day: u32,
    selections: Vec<FoodSelection>,
}

impl PlanBuilder {
    pub fn new(target_kcal: f64, meals_per_day: u32) -> Self {
        Self {
            target_kcal,
            meals_per_day,
            selections: Vec::new(),
        }
    }

    /// Resume editing a saved plan.
    pub fn from_saved(plan: &SavedPlan) -> Self {
        Self {
            target_kcal: plan.target_kcal,
            meals_per_day: plan.meals_per_day,
            selections: plan.selections.clone(),
        }
    }

    pub fn target_kcal(&self) -> f64 {
        self.target_kcal
    }

    pub fn meals_per_day(&self) -> u32 {
        self.meals_per_day
    }

    pub fn selections(&self) -> &[FoodSelection] {
        &self.selections
    }

    /// Meals assigned so far.
    pub fn meals_used(&self) -> u32 {
        self.selections.iter().map(|s| s.meal_count).sum()
    }

    pub fn remaining_slots(&self) -> u32 {
        self.meals_per_day.saturating_sub(self.meals_used())
    }

    pub fn is_complete(&self) -> bool {
        self.meals_used() == self.meals_per_day
    }

    /// Assign meals to a food. Adding a food twice merges its meal counts.
    pub fn add(&mut self, food_id: &str, meal_count: u32) -> Result<()> {
        if meal_count == 0 {
            return Err(PlannerError::InvalidInput(
                "Meal count must be at least 1".to_string(),
            ));
        }
        if meal_count > self.remaining_slots() {
            return Err(PlannerError::InvalidInput(format!(
                "Only {} meal slot(s) remaining",
                self.remaining_slots()
            )));
        }

        match self.selections.iter_mut().find(|s| s.food_id == food_id) {
            Some(existing) => existing.meal_count += meal_count,
            None => self.selections.push(FoodSelection::new(food_id, meal_count)),
        }
        Ok(())
    }

    /// Drop a food from the plan.
    pub fn remove(&mut self, food_id: &str) -> Result<()> {
        let before = self.selections.len();
        self.selections.retain(|s| s.food_id != food_id);
        if self.selections.len() == before {
            return Err(PlannerError::FoodNotFound(food_id.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Current summary of the plan, valid or not.
    pub fn summary(&self, catalog: &[FoodItem], config: &PlannerConfig) -> PlanSummary {
        aggregate_multi_food_plan(
            &self.selections,
            catalog,
            self.target_kcal,
            self.meals_per_day,
            config,
        )
    }

    /// Finish the plan. Fails unless every meal slot is filled.
    pub fn into_saved_plan(self, name: &str) -> Result<SavedPlan> {
        if !self.is_complete() {
            return Err(PlannerError::IncompletePlan(format!(
                "{} of {} meals assigned",
                self.meals_used(),
                self.meals_per_day
            )));
        }
        Ok(SavedPlan {
            name: name.to_string(),
            target_kcal: self.target_kcal,
            meals_per_day: self.meals_per_day,
            selections: self.selections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food_fixtures::{dry_food, wet_food};

    #[test]
    fn test_add_tracks_slots() {
        let mut builder = PlanBuilder::new(240.0, 3);
        assert_eq!(builder.remaining_slots(), 3);

        builder.add("d1", 2).unwrap();
        assert_eq!(builder.remaining_slots(), 1);
        assert!(!builder.is_complete());

        builder.add("w1", 1).unwrap();
        assert!(builder.is_complete());
    }

    #[test]
    fn test_add_rejects_overflow_and_zero() {
        let mut builder = PlanBuilder::new(240.0, 2);
        assert!(matches!(
            builder.add("d1", 0),
            Err(PlannerError::InvalidInput(_))
        ));
        builder.add("d1", 2).unwrap();
        assert!(matches!(
            builder.add("w1", 1),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_add_merges_same_food() {
        let mut builder = PlanBuilder::new(240.0, 4);
        builder.add("d1", 1).unwrap();
        builder.add("d1", 2).unwrap();
        assert_eq!(builder.selections().len(), 1);
        assert_eq!(builder.selections()[0].meal_count, 3);
    }

    #[test]
    fn test_remove() {
        let mut builder = PlanBuilder::new(240.0, 2);
        builder.add("d1", 1).unwrap();
        builder.remove("d1").unwrap();
        assert_eq!(builder.meals_used(), 0);
        assert!(matches!(
            builder.remove("d1"),
            Err(PlannerError::FoodNotFound(_))
        ));
    }

    #[test]
    fn test_save_requires_complete_plan() {
        let mut builder = PlanBuilder::new(240.0, 2);
        builder.add("d1", 1).unwrap();
        let err = builder.clone().into_saved_plan("half").unwrap_err();
        assert!(matches!(err, PlannerError::IncompletePlan(_)));

        builder.add("w1", 1).unwrap();
        let saved = builder.into_saved_plan("full").unwrap();
        assert_eq!(saved.selections.len(), 2);
        assert_eq!(saved.target_kcal, 240.0);
    }

    #[test]
    fn test_summary_reflects_progress() {
        let catalog = vec![dry_food("d1", 400.0, 28.0), wet_food("w1", 80.0, 24.0)];
        let config = PlannerConfig::default();
        let mut builder = PlanBuilder::new(240.0, 2);

        builder.add("d1", 1).unwrap();
        let summary = builder.summary(&catalog, &config);
        assert!(!summary.is_valid);
        assert_eq!(summary.message, "1 meal slot remaining");

        builder.add("w1", 1).unwrap();
        assert!(builder.summary(&catalog, &config).is_valid);
    }
}
