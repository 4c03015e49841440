use serde::{Deserialize, Serialize};

/// Physical form of a food product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodForm {
    Dry,
    Wet,
}

impl FoodForm {
    /// The other form, used when pairing wet and dry foods.
    pub fn opposite(self) -> Self {
        match self {
            FoodForm::Dry => FoodForm::Wet,
            FoodForm::Wet => FoodForm::Dry,
        }
    }

    /// Measuring unit for daily amounts.
    pub fn unit(self) -> &'static str {
        match self {
            FoodForm::Dry => "cup",
            FoodForm::Wet => "can",
        }
    }
}

/// Life stage a product is formulated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    Kitten,
    Adult,
    Senior,
    All,
}

/// A commercial food product from the catalog.
///
/// Dry foods carry `kcal_per_cup`, wet foods carry `kcal_per_can` and
/// `can_size_oz`. Macros are guaranteed-analysis percentages (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub brand: String,
    pub name: String,
    pub form: FoodForm,
    pub life_stage: LifeStage,

    #[serde(default)]
    pub kcal_per_cup: Option<f64>,

    #[serde(default)]
    pub kcal_per_can: Option<f64>,

    #[serde(default)]
    pub can_size_oz: Option<f64>,

    pub price: f64,

    #[serde(default)]
    pub package_size: String,

    pub servings_per_package: f64,

    pub protein_pct: f64,
    pub fat_pct: f64,
    pub fiber_pct: f64,
    pub moisture_pct: f64,

    #[serde(default)]
    pub special_benefits: Vec<String>,

    #[serde(default)]
    pub complete_and_balanced: bool,
}

impl FoodItem {
    /// Energy per serving (cup or can) for this food's form, 0 when missing.
    #[inline]
    pub fn energy_per_serving(&self) -> f64 {
        let density = match self.form {
            FoodForm::Dry => self.kcal_per_cup,
            FoodForm::Wet => self.kcal_per_can,
        };
        density.filter(|kcal| kcal.is_finite() && *kcal > 0.0).unwrap_or(0.0)
    }

    /// Whether amounts can be computed for this food at all.
    #[inline]
    pub fn has_energy(&self) -> bool {
        self.energy_per_serving() > 0.0
    }

    /// Total energy in one package.
    #[inline]
    pub fn package_energy(&self) -> f64 {
        self.energy_per_serving() * self.servings_per_package
    }

    /// Measuring unit for this food.
    #[inline]
    pub fn unit(&self) -> &'static str {
        self.form.unit()
    }

    /// "Brand Name" label for display.
    pub fn display_name(&self) -> String {
        if self.brand.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.brand, self.name)
        }
    }

    /// Whether the food lists a benefit tag (case-insensitive).
    pub fn has_benefit(&self, tag: &str) -> bool {
        self.special_benefits
            .iter()
            .any(|b| b.eq_ignore_ascii_case(tag))
    }

    /// Basic validation: one energy density matching the form, sane macros.
    pub fn is_valid(&self) -> bool {
        let density_matches_form = match self.form {
            FoodForm::Dry => self.kcal_per_cup.is_some() && self.kcal_per_can.is_none(),
            FoodForm::Wet => self.kcal_per_can.is_some() && self.kcal_per_cup.is_none(),
        };
        let pct = |v: f64| (0.0..=100.0).contains(&v);

        density_matches_form
            && self.price >= 0.0
            && self.servings_per_package > 0.0
            && pct(self.protein_pct)
            && pct(self.fat_pct)
            && pct(self.fiber_pct)
            && pct(self.moisture_pct)
    }
}
