use std::collections::HashMap;
use std::sync::LazyLock;

// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

/// Pounds per kilogram.
pub const LBS_PER_KG: f64 = 2.20462;

/// RER = RER_COEFFICIENT * kg^RER_EXPONENT.
pub const RER_COEFFICIENT: f64 = 70.0;
pub const RER_EXPONENT: f64 = 0.75;

/// Life-stage factors, applied in priority order.
pub const KITTEN_FACTOR: f64 = 2.5;
pub const WEIGHT_LOSS_FACTOR: f64 = 0.8;
pub const INACTIVE_FACTOR: f64 = 1.0;
pub const ACTIVE_FACTOR: f64 = 1.6;
pub const ALTERED_FACTOR: f64 = 1.2;
pub const INTACT_FACTOR: f64 = 1.4;

/// Share of DER available for treats.
pub const TREAT_FRACTION: f64 = 0.1;

/// Meals per day by situation.
pub const KITTEN_MEALS_PER_DAY: u32 = 4;
pub const WEIGHT_LOSS_MEALS_PER_DAY: u32 = 3;
pub const DEFAULT_MEALS_PER_DAY: u32 = 2;

/// Age brackets in months.
pub const KITTEN_MAX_AGE_MONTHS: u32 = 12;
pub const SENIOR_MIN_AGE_MONTHS: u32 = 84;

// ─────────────────────────────────────────────────────────────────────────────
// Cost
// ─────────────────────────────────────────────────────────────────────────────

/// Days in a billing month.
pub const DAYS_PER_MONTH: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Default sub-score weights (sum to 1.0).
pub const NUTRITION_WEIGHT: f64 = 0.35;
pub const VALUE_WEIGHT: f64 = 0.30;
pub const SUITABILITY_WEIGHT: f64 = 0.35;

/// Dry-matter protein that earns the full protein points.
pub const PROTEIN_CEILING_DMB: f64 = 50.0;
pub const PROTEIN_MAX_POINTS: f64 = 40.0;

/// Ideal fat:protein ratio and the deviation that zeroes the points.
pub const IDEAL_FAT_PROTEIN_RATIO: f64 = 0.45;
pub const FAT_RATIO_TOLERANCE: f64 = 0.3;
pub const FAT_BALANCE_MAX_POINTS: f64 = 20.0;

/// Fiber band (percent as fed) and points per band.
pub const FIBER_MIN_PCT: f64 = 2.0;
pub const FIBER_MAX_PCT: f64 = 5.0;
pub const FIBER_IN_RANGE_POINTS: f64 = 20.0;
pub const FIBER_LOW_POINTS: f64 = 14.0;
pub const FIBER_HIGH_POINTS: f64 = 10.0;

pub const COMPLETENESS_POINTS: f64 = 20.0;

/// Value score when there is no batch to compare against.
pub const DEFAULT_VALUE_SCORE: f64 = 50.0;

pub const LIFE_STAGE_MATCH_POINTS: f64 = 25.0;
pub const LIFE_STAGE_UNIVERSAL_POINTS: f64 = 20.0;
pub const HEALTH_MATCH_MAX_POINTS: f64 = 50.0;
pub const BENEFIT_POINTS_EACH: f64 = 5.0;
pub const BENEFIT_MAX_POINTS: f64 = 25.0;

// ─────────────────────────────────────────────────────────────────────────────
// Health compatibility
// ─────────────────────────────────────────────────────────────────────────────

pub const COMPAT_BASE_SCORE: f64 = 1.0;
pub const COMPAT_REQUIRED_BONUS: f64 = 0.2;
pub const COMPAT_REQUIRED_MISSING_PENALTY: f64 = 0.5;
pub const COMPAT_PREFERRED_BONUS: f64 = 0.1;
pub const COMPAT_MACRO_PENALTY: f64 = 0.3;
pub const COMPAT_FIBER_PENALTY: f64 = 0.2;

/// A food is compatible when its score is strictly above this.
pub const COMPAT_THRESHOLD: f64 = 0.3;

// ─────────────────────────────────────────────────────────────────────────────
// Badges
// ─────────────────────────────────────────────────────────────────────────────

/// Fraction of the batch (cheapest first) eligible for a budget pick.
pub const BUDGET_PICK_FRACTION: f64 = 0.25;
pub const BUDGET_PICK_MIN_SCORE: u32 = 70;

// ─────────────────────────────────────────────────────────────────────────────
// Portions & meal plans
// ─────────────────────────────────────────────────────────────────────────────

/// Measuring increments: quarter cups and half cans.
pub const DRY_INCREMENT: f64 = 0.25;
pub const WET_INCREMENT: f64 = 0.5;

/// Largest accepted deviation from the energy target, in percent.
pub const MAX_DEVIATION_PCT: f64 = 20.0;

/// Number of portion options offered as single-food plans.
pub const SINGLE_OPTION_COUNT: usize = 3;

/// A combo is only tried when the primary leaves more than this gap.
pub const COMBO_MIN_GAP_KCAL: f64 = 20.0;

/// Combos this close to target outrank everything else.
pub const COMBO_PRIORITY_PCT: f64 = 5.0;

/// Deviation differences inside one band are ranked by cost instead.
pub const RANKING_BAND_PCT: f64 = 3.0;

pub const DEFAULT_MAX_MEAL_OPTIONS: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Health-condition requirements
// ─────────────────────────────────────────────────────────────────────────────

/// What a health condition asks of a food.
///
/// Macro thresholds are guaranteed-analysis percentages (as fed).
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRequirements {
    pub required_benefits: &'static [&'static str],
    pub preferred_benefits: &'static [&'static str],
    pub max_fat_pct: Option<f64>,
    pub min_protein_pct: Option<f64>,
    pub max_fiber_pct: Option<f64>,
}

/// Static requirement table keyed by condition tag.
pub static HEALTH_CONDITION_REQUIREMENTS: LazyLock<HashMap<&'static str, ConditionRequirements>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert(
            "obesity",
            ConditionRequirements {
                required_benefits: &["weight_management"],
                preferred_benefits: &["high_protein", "low_calorie"],
                max_fat_pct: Some(14.0),
                min_protein_pct: None,
                max_fiber_pct: None,
            },
        );
        m.insert(
            "diabetes",
            ConditionRequirements {
                required_benefits: &[],
                preferred_benefits: &["high_protein", "grain_free", "weight_management"],
                max_fat_pct: None,
                min_protein_pct: Some(9.0),
                max_fiber_pct: None,
            },
        );
        m.insert(
            "urinary_issues",
            ConditionRequirements {
                required_benefits: &["urinary_health"],
                preferred_benefits: &[],
                max_fat_pct: None,
                min_protein_pct: None,
                max_fiber_pct: None,
            },
        );
        m.insert(
            "kidney_disease",
            ConditionRequirements {
                required_benefits: &["kidney_support"],
                preferred_benefits: &["urinary_health"],
                max_fat_pct: None,
                min_protein_pct: None,
                max_fiber_pct: None,
            },
        );
        m.insert(
            "sensitive_stomach",
            ConditionRequirements {
                required_benefits: &["sensitive_stomach"],
                preferred_benefits: &["digestive_health", "limited_ingredient"],
                max_fat_pct: Some(20.0),
                min_protein_pct: None,
                max_fiber_pct: Some(5.0),
            },
        );
        m.insert(
            "hairballs",
            ConditionRequirements {
                required_benefits: &["hairball_control"],
                preferred_benefits: &["indoor", "digestive_health"],
                max_fat_pct: None,
                min_protein_pct: None,
                max_fiber_pct: None,
            },
        );
        m.insert(
            "joint_issues",
            ConditionRequirements {
                required_benefits: &["joint_support"],
                preferred_benefits: &["weight_management"],
                max_fat_pct: None,
                min_protein_pct: None,
                max_fiber_pct: None,
            },
        );
        m.insert(
            "skin_allergies",
            ConditionRequirements {
                required_benefits: &[],
                preferred_benefits: &["skin_coat", "limited_ingredient", "grain_free"],
                max_fat_pct: None,
                min_protein_pct: None,
                max_fiber_pct: None,
            },
        );
        m.insert(
            "dental_issues",
            ConditionRequirements {
                required_benefits: &["dental_health"],
                preferred_benefits: &[],
                max_fat_pct: None,
                min_protein_pct: None,
                max_fiber_pct: None,
            },
        );
        m
    });

/// Requirement record for a condition tag (case-insensitive).
pub fn condition_requirements(condition: &str) -> Option<&'static ConditionRequirements> {
    HEALTH_CONDITION_REQUIREMENTS.get(condition.to_ascii_lowercase().as_str())
}
