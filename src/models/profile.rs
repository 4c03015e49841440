use serde::{Deserialize, Serialize};

use crate::planner::constants::{KITTEN_MAX_AGE_MONTHS, SENIOR_MIN_AGE_MONTHS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReproductiveStatus {
    Intact,
    Altered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Inactive,
    #[default]
    Normal,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

/// Age bracket derived from a profile's age in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Kitten,
    Adult,
    Senior,
}

/// Foods the cat currently eats, with stored daily amounts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentFeeding {
    pub primary_food_id: Option<String>,
    #[serde(default)]
    pub primary_daily_amount: f64,
    pub secondary_food_id: Option<String>,
    #[serde(default)]
    pub secondary_daily_amount: f64,
}

/// Physiological profile of a cat.
///
/// The planner only reads profiles; validation (positive weight etc.)
/// happens where profiles are created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatProfile {
    pub id: String,
    pub name: String,
    pub weight_lbs: f64,
    pub age_months: u32,
    pub sex: Sex,
    pub reproductive_status: ReproductiveStatus,

    /// Cosmetic only.
    #[serde(default)]
    pub breed: Option<String>,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub weight_goal: WeightGoal,

    #[serde(default)]
    pub health_conditions: Vec<String>,

    /// Preferred number of meals per day.
    #[serde(default)]
    pub meals_per_day: Option<u32>,

    #[serde(default)]
    pub current_feeding: Option<CurrentFeeding>,
}

impl CatProfile {
    pub fn age_bracket(&self) -> AgeBracket {
        if self.age_months < KITTEN_MAX_AGE_MONTHS {
            AgeBracket::Kitten
        } else if self.age_months >= SENIOR_MIN_AGE_MONTHS {
            AgeBracket::Senior
        } else {
            AgeBracket::Adult
        }
    }

    #[inline]
    pub fn is_kitten(&self) -> bool {
        self.age_bracket() == AgeBracket::Kitten
    }

    #[inline]
    pub fn is_altered(&self) -> bool {
        self.reproductive_status == ReproductiveStatus::Altered
    }

    /// Basic validation of the fields the planner assumes are sane.
    pub fn is_valid(&self) -> bool {
        self.weight_lbs.is_finite()
            && self.weight_lbs > 0.0
            && self.meals_per_day.is_none_or(|m| m > 0)
    }
}
