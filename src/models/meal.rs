use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};
use crate::models::Nutrients;
use crate::models::ingredient::{Ingredient, check_weight};
use crate::nutrition::calculations::{per_100g_of, round2};
use crate::nutrition::constants::REFERENCE_PORTION_G;

/// One ingredient in a meal.
///
/// Holds its own copy of the ingredient, so later catalog changes never alter a
/// line that was already added.
#[derive(Debug, Clone)]
pub struct LineItem {
    ingredient: Ingredient,
    weight_g: f64,
}

impl LineItem {
    pub fn ingredient(&self) -> &Ingredient {
        &self.ingredient
    }

    pub fn weight_g(&self) -> f64 {
        self.weight_g
    }
}

/// A meal under construction, with running totals.
#[derive(Debug, Clone)]
pub struct Meal {
    name: String,
    lines: Vec<LineItem>,
    totals: Nutrients,
    total_weight_g: f64,
}

/// Absolute nutrition for a whole meal, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalNutrition {
    #[serde(alias = "total_calories")]
    pub calories: f64,
    #[serde(alias = "total_protein_g")]
    pub protein_g: f64,
    #[serde(alias = "total_carbs_g")]
    pub carbs_g: f64,
    #[serde(alias = "total_fat_g")]
    pub fat_g: f64,
    #[serde(alias = "total_weight_g")]
    pub weight_g: f64,
}

/// Nutrition per 100g of a meal. Every field is `None` when the meal weighs nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionPer100g {
    #[serde(alias = "calories_per_100g")]
    pub calories: Option<f64>,
    #[serde(alias = "protein_per_100g")]
    pub protein_g: Option<f64>,
    #[serde(alias = "carbs_per_100g")]
    pub carbs_g: Option<f64>,
    #[serde(alias = "fat_per_100g")]
    pub fat_g: Option<f64>,
}

impl NutritionPer100g {
    pub fn undefined() -> Self {
        Self::default()
    }

    pub fn is_undefined(&self) -> bool {
        self.calories.is_none()
    }
}

impl From<Option<Nutrients>> for NutritionPer100g {
    fn from(value: Option<Nutrients>) -> Self {
        match value {
            None => Self::undefined(),
            Some(n) => Self {
                calories: Some(round2(n.calories)),
                protein_g: Some(round2(n.protein_g)),
                carbs_g: Some(round2(n.carbs_g)),
                fat_g: Some(round2(n.fat_g)),
            },
        }
    }
}

/// Per-line figures as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemBreakdown {
    pub name: String,
    pub weight_g: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Ingredient name and weight, as stored in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsed {
    pub name: String,
    pub weight_g: f64,
}

impl Meal {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NutritionError::validation(
                "Meal name must be a non-empty string.",
            ));
        }

        Ok(Self {
            name,
            lines: Vec::new(),
            totals: Nutrients::zero(),
            total_weight_g: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add `weight_g` grams of `ingredient`, updating the running totals.
    ///
    /// A zero weight is kept as a line but contributes nothing.
    pub fn add_line(&mut self, ingredient: &Ingredient, weight_g: f64) -> Result<()> {
        check_weight(weight_g)?;
        let contribution = ingredient.scale(weight_g)?;

        let new_weight = self.total_weight_g + weight_g;
        let new_totals = self.totals + contribution;
        if !new_weight.is_finite() || !new_totals.is_finite() {
            return Err(NutritionError::validation(
                "Meal totals are too large to represent.",
            ));
        }

        self.lines.push(LineItem {
            ingredient: ingredient.clone(),
            weight_g,
        });
        self.totals = new_totals;
        self.total_weight_g = new_weight;

        tracing::debug!(
            meal = %self.name,
            ingredient = ingredient.name(),
            weight_g,
            "added line item"
        );
        Ok(())
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Unrounded running totals.
    pub fn raw_totals(&self) -> Nutrients {
        self.totals
    }

    pub fn total_weight_g(&self) -> f64 {
        self.total_weight_g
    }

    pub fn total_nutrition(&self) -> TotalNutrition {
        TotalNutrition {
            calories: round2(self.totals.calories),
            protein_g: round2(self.totals.protein_g),
            carbs_g: round2(self.totals.carbs_g),
            fat_g: round2(self.totals.fat_g),
            weight_g: round2(self.total_weight_g),
        }
    }

    pub fn nutrition_per_100g(&self) -> NutritionPer100g {
        per_100g_of(self.totals, self.total_weight_g).into()
    }

    /// Per-line nutrition, derived from each line's ingredient copy and weight.
    pub fn line_items(&self) -> Vec<LineItemBreakdown> {
        self.lines
            .iter()
            .map(|line| {
                // Weight was validated in add_line.
                let n = line.ingredient.per_100g() * (line.weight_g / REFERENCE_PORTION_G);
                LineItemBreakdown {
                    name: line.ingredient.name().to_string(),
                    weight_g: line.weight_g,
                    calories: round2(n.calories),
                    protein_g: round2(n.protein_g),
                    carbs_g: round2(n.carbs_g),
                    fat_g: round2(n.fat_g),
                }
            })
            .collect()
    }

    pub fn ingredients_used(&self) -> Vec<IngredientUsed> {
        self.lines
            .iter()
            .map(|line| IngredientUsed {
                name: line.ingredient.name().to_string(),
                weight_g: line.weight_g,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chicken() -> Ingredient {
        Ingredient::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6).unwrap()
    }

    fn rice() -> Ingredient {
        Ingredient::new("Rice", 111.0, 2.6, 23.0, 0.9).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert!(Meal::new("").is_err());
        assert!(Meal::new("Dinner").is_ok());
    }

    #[test]
    fn test_chicken_and_rice_totals() {
        let mut meal = Meal::new("Dinner").unwrap();
        meal.add_line(&chicken(), 200.0).unwrap();
        meal.add_line(&rice(), 150.0).unwrap();

        let total = meal.total_nutrition();
        assert_eq!(total.calories, 496.5);
        assert_eq!(total.protein_g, 65.9);
        assert_eq!(total.carbs_g, 34.5);
        assert_eq!(total.fat_g, 8.55);
        assert_eq!(total.weight_g, 350.0);
    }

    #[test]
    fn test_empty_meal() {
        let meal = Meal::new("Empty Plate").unwrap();
        assert_eq!(meal.total_nutrition(), TotalNutrition::default());
        assert!(meal.nutrition_per_100g().is_undefined());
        assert_eq!(meal.nutrition_per_100g(), NutritionPer100g::undefined());
    }

    #[test]
    fn test_zero_weight_line_is_kept() {
        let mut meal = Meal::new("Zero").unwrap();
        meal.add_line(&chicken(), 0.0).unwrap();

        assert_eq!(meal.line_count(), 1);
        assert_eq!(meal.total_nutrition().calories, 0.0);
        assert!(meal.nutrition_per_100g().is_undefined());
        assert_eq!(meal.line_items()[0].weight_g, 0.0);
    }

    #[test]
    fn test_negative_weight_leaves_meal_untouched() {
        let mut meal = Meal::new("Dinner").unwrap();
        assert!(meal.add_line(&chicken(), -100.0).is_err());
        assert!(meal.is_empty());
        assert_eq!(meal.total_weight_g(), 0.0);
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let mut meal = Meal::new("Huge").unwrap();
        meal.add_line(&rice(), 1e308).unwrap();

        let result = meal.add_line(&rice(), 1e308);
        assert!(matches!(result, Err(NutritionError::Validation(_))));
        assert_eq!(meal.line_count(), 1);
        assert!(meal.total_weight_g().is_finite());
        assert!(meal.raw_totals().is_finite());
    }

    #[test]
    fn test_line_items_are_rounded() {
        let mut meal = Meal::new("Dinner").unwrap();
        meal.add_line(&rice(), 150.0).unwrap();

        let items = meal.line_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Rice");
        assert_eq!(items[0].calories, 166.5);
        assert_eq!(items[0].protein_g, 3.9);
        assert_eq!(items[0].fat_g, 1.35);
    }

    #[test]
    fn test_per_100g_serializes_null_when_undefined() {
        let json = serde_json::to_value(NutritionPer100g::undefined()).unwrap();
        assert!(json["calories"].is_null());
        assert!(json["fat_g"].is_null());
    }
}
