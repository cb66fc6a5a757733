use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};
use crate::models::Nutrients;
use crate::nutrition::constants::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, MACRO_CALORIE_TOLERANCE, PROTEIN_KCAL_PER_G,
    REFERENCE_PORTION_G,
};

/// An ingredient with its nutrition per 100 grams.
///
/// Fields are private: the only ways in are [`Ingredient::new`] and deserialization,
/// both of which validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IngredientRecord")]
pub struct Ingredient {
    name: String,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

/// Unvalidated on-disk shape. Also accepts the older `protein`/`carbs`/`fat` keys.
#[derive(Debug, Deserialize)]
struct IngredientRecord {
    name: String,
    calories: f64,
    #[serde(alias = "protein")]
    protein_g: f64,
    #[serde(alias = "carbs")]
    carbs_g: f64,
    #[serde(alias = "fat")]
    fat_g: f64,
}

impl TryFrom<IngredientRecord> for Ingredient {
    type Error = NutritionError;

    fn try_from(record: IngredientRecord) -> Result<Self> {
        Ingredient::new(
            record.name,
            record.calories,
            record.protein_g,
            record.carbs_g,
            record.fat_g,
        )
    }
}

impl Ingredient {
    /// Build a validated ingredient. All figures are per 100g.
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NutritionError::validation(
                "Ingredient name must be a non-empty string.",
            ));
        }

        check_amount("Calories", calories)?;
        check_amount("Protein", protein_g)?;
        check_amount("Carbs", carbs_g)?;
        check_amount("Fat", fat_g)?;

        let ingredient = Self {
            name,
            calories,
            protein_g,
            carbs_g,
            fat_g,
        };

        if ingredient.exceeds_stated_calories() {
            tracing::warn!(
                ingredient = %ingredient.name,
                stated = ingredient.calories,
                from_macros = ingredient.macro_calories(),
                "calories derived from macronutrients exceed stated calories"
            );
        }

        Ok(ingredient)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn protein_g(&self) -> f64 {
        self.protein_g
    }

    pub fn carbs_g(&self) -> f64 {
        self.carbs_g
    }

    pub fn fat_g(&self) -> f64 {
        self.fat_g
    }

    /// Per-100g figures as a [`Nutrients`] value.
    pub fn per_100g(&self) -> Nutrients {
        Nutrients::new(self.calories, self.protein_g, self.carbs_g, self.fat_g)
    }

    /// Calories implied by the macronutrients (Atwater factors).
    pub fn macro_calories(&self) -> f64 {
        self.protein_g * PROTEIN_KCAL_PER_G
            + self.carbs_g * CARBS_KCAL_PER_G
            + self.fat_g * FAT_KCAL_PER_G
    }

    /// Soft plausibility check. Never causes construction to fail.
    pub fn exceeds_stated_calories(&self) -> bool {
        self.macro_calories() > self.calories + MACRO_CALORIE_TOLERANCE
    }

    /// Nutrition for `weight_grams` of this ingredient.
    pub fn scale(&self, weight_grams: f64) -> Result<Nutrients> {
        check_weight(weight_grams)?;
        Ok(self.per_100g() * (weight_grams / REFERENCE_PORTION_G))
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(NutritionError::validation(format!(
            "{} must be a non-negative number.",
            field
        )));
    }
    Ok(())
}

/// Weights are grams and must be finite and non-negative.
pub(crate) fn check_weight(weight_grams: f64) -> Result<()> {
    if !weight_grams.is_finite() || weight_grams < 0.0 {
        return Err(NutritionError::validation(
            "Weight must be a non-negative number.",
        ));
    }
    Ok(())
}
