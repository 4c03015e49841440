use serde::{Deserialize, Serialize};

use crate::models::{AgeBracket, CatProfile, FoodItem, LifeStage};
use crate::planner::constants::*;

/// Outcome of checking a food against a set of health conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCompatibility {
    pub compatible: bool,
    /// Benefit tags that satisfied a required or preferred benefit.
    pub matched_benefits: Vec<String>,
    /// Clamped to >= 0 for reporting.
    pub score: f64,
}

/// Whether a food's life stage suits the profile's age bracket.
///
/// "All" foods always suit; adult foods also suit seniors.
pub fn is_life_stage_appropriate(food: &FoodItem, profile: &CatProfile) -> bool {
    match (food.life_stage, profile.age_bracket()) {
        (LifeStage::All, _) => true,
        (LifeStage::Kitten, AgeBracket::Kitten) => true,
        (LifeStage::Adult, AgeBracket::Adult | AgeBracket::Senior) => true,
        (LifeStage::Senior, AgeBracket::Senior) => true,
        _ => false,
    }
}

/// Score a food against health conditions.
///
/// Unknown condition tags impose no requirements.
pub fn check_health_compatibility(food: &FoodItem, conditions: &[String]) -> HealthCompatibility {
    if conditions.is_empty() {
        return HealthCompatibility {
            compatible: true,
            matched_benefits: Vec::new(),
            score: COMPAT_BASE_SCORE,
        };
    }

    let mut score = COMPAT_BASE_SCORE;
    let mut matched: Vec<String> = Vec::new();
    let mut note_match = |tag: &str| {
        if !matched.iter().any(|m| m == tag) {
            matched.push(tag.to_string());
        }
    };

    for condition in conditions {
        let Some(req) = condition_requirements(condition) else {
            continue;
        };

        let required_hits = req
            .required_benefits
            .iter()
            .filter(|tag| food.has_benefit(tag))
            .inspect(|tag| note_match(tag))
            .count();
        score += COMPAT_REQUIRED_BONUS * required_hits as f64;
        if !req.required_benefits.is_empty() && required_hits == 0 {
            score -= COMPAT_REQUIRED_MISSING_PENALTY;
        }

        let preferred_hits = req
            .preferred_benefits
            .iter()
            .filter(|tag| food.has_benefit(tag))
            .inspect(|tag| note_match(tag))
            .count();
        score += COMPAT_PREFERRED_BONUS * preferred_hits as f64;

        if req.max_fat_pct.is_some_and(|max| food.fat_pct > max) {
            score -= COMPAT_MACRO_PENALTY;
        }
        if req.min_protein_pct.is_some_and(|min| food.protein_pct < min) {
            score -= COMPAT_MACRO_PENALTY;
        }
        if req.max_fiber_pct.is_some_and(|max| food.fiber_pct > max) {
            score -= COMPAT_FIBER_PENALTY;
        }
    }

    HealthCompatibility {
        compatible: score > COMPAT_THRESHOLD,
        matched_benefits: matched,
        score: score.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::food_fixtures::dry_food;
    use crate::models::profile_fixtures::adult_cat;

    fn conditions(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_life_stage_matrix() {
        let mut cat = adult_cat(10.0);
        let mut food = dry_food("d1", 400.0, 30.0);

        food.life_stage = LifeStage::All;
        assert!(is_life_stage_appropriate(&food, &cat));

        food.life_stage = LifeStage::Kitten;
        assert!(!is_life_stage_appropriate(&food, &cat));

        food.life_stage = LifeStage::Senior;
        assert!(!is_life_stage_appropriate(&food, &cat));

        cat.age_months = 100;
        assert!(is_life_stage_appropriate(&food, &cat));
        food.life_stage = LifeStage::Adult;
        assert!(is_life_stage_appropriate(&food, &cat)); // adult food suits seniors

        cat.age_months = 5;
        assert!(!is_life_stage_appropriate(&food, &cat));
        food.life_stage = LifeStage::Kitten;
        assert!(is_life_stage_appropriate(&food, &cat));
    }

    #[test]
    fn test_no_conditions_always_compatible() {
        let food = dry_food("d1", 400.0, 30.0);
        let result = check_health_compatibility(&food, &[]);
        assert!(result.compatible);
        assert_eq!(result.score, 1.0);
        assert!(result.matched_benefits.is_empty());
    }

    #[test]
    fn test_missing_required_benefit_penalized() {
        let food = dry_food("d1", 400.0, 30.0);
        // 1.0 - 0.5 = 0.5, still above threshold
        let result = check_health_compatibility(&food, &conditions(&["urinary_issues"]));
        assert!((result.score - 0.5).abs() < 1e-9);
        assert!(result.compatible);

        // Two unmet conditions: 1.0 - 0.5 - 0.5 = 0.0
        let result =
            check_health_compatibility(&food, &conditions(&["urinary_issues", "dental_issues"]));
        assert_eq!(result.score, 0.0);
        assert!(!result.compatible);
    }

    #[test]
    fn test_matched_benefits_add_points() {
        let mut food = dry_food("d1", 400.0, 30.0);
        food.fat_pct = 12.0;
        food.special_benefits = conditions(&["weight_management", "high_protein"]);

        let result = check_health_compatibility(&food, &conditions(&["obesity"]));
        // 1.0 + 0.2 (required) + 0.1 (preferred)
        assert!((result.score - 1.3).abs() < 1e-9);
        assert_eq!(
            result.matched_benefits,
            vec!["weight_management".to_string(), "high_protein".to_string()]
        );
    }

    #[test]
    fn test_macro_thresholds() {
        let mut food = dry_food("d1", 400.0, 30.0);
        food.special_benefits = conditions(&["sensitive_stomach"]);
        food.fat_pct = 22.0;
        food.fiber_pct = 6.0;

        // 1.0 + 0.2 - 0.3 (fat) - 0.2 (fiber)
        let result = check_health_compatibility(&food, &conditions(&["sensitive_stomach"]));
        assert!((result.score - 0.7).abs() < 1e-9);
        assert!(result.compatible);
    }

    #[test]
    fn test_score_clamped_and_threshold_strict() {
        let mut food = dry_food("d1", 400.0, 30.0);
        food.fat_pct = 30.0;
        // obesity: 1.0 - 0.5 - 0.3 = 0.2
        let result = check_health_compatibility(&food, &conditions(&["obesity"]));
        assert!(!result.compatible);
        assert!((result.score - 0.2).abs() < 1e-9);

        let result = check_health_compatibility(
            &food,
            &conditions(&["obesity", "urinary_issues", "dental_issues"]),
        );
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_unknown_condition_ignored() {
        let food = dry_food("d1", 400.0, 30.0);
        let result = check_health_compatibility(&food, &conditions(&["grumpiness"]));
        assert!(result.compatible);
        assert_eq!(result.score, 1.0);
    }
}
