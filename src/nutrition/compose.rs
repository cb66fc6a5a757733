//! Turning loosely typed boundary input into validated ingredients and meals.

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{NutritionError, Result};
use crate::models::{Ingredient, Meal, Nutrients};
use crate::nutrition::calculations::normalize_to_per_100g;
use crate::nutrition::constants::{DEFAULT_PORTION_G, SUGGESTION_THRESHOLD};
use crate::state::IngredientCatalog;

/// A number that may arrive as JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    pub fn to_f64(&self, field: &str) -> Result<f64> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                NutritionError::validation(format!("{} must be a number, got '{}'.", field, s))
            })?,
        };

        if !value.is_finite() {
            return Err(NutritionError::validation(format!(
                "{} must be a finite number.",
                field
            )));
        }
        Ok(value)
    }
}

/// Ingredient figures as entered by a user, stated for `portion_size` grams.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: Option<String>,
    pub portion_size: Option<LooseNumber>,
    pub calories: Option<LooseNumber>,
    pub protein: Option<LooseNumber>,
    pub carbs: Option<LooseNumber>,
    pub fat: Option<LooseNumber>,
}

impl IngredientInput {
    /// Validate, normalize to per-100g and build the ingredient.
    pub fn into_ingredient(self) -> Result<Ingredient> {
        let (Some(name), Some(calories), Some(protein), Some(carbs), Some(fat)) =
            (self.name, self.calories, self.protein, self.carbs, self.fat)
        else {
            return Err(NutritionError::validation("Missing required fields."));
        };
        if name.trim().is_empty() {
            return Err(NutritionError::validation("Missing required fields."));
        }

        let portion = match &self.portion_size {
            Some(p) => p.to_f64("Portion size")?,
            None => DEFAULT_PORTION_G,
        };

        let per_portion = Nutrients::new(
            calories.to_f64("Calories")?,
            protein.to_f64("Protein")?,
            carbs.to_f64("Carbs")?,
            fat.to_f64("Fat")?,
        );
        let per_100g = normalize_to_per_100g(portion, per_portion)?;

        Ingredient::new(
            name.trim(),
            per_100g.calories,
            per_100g.protein_g,
            per_100g.carbs_g,
            per_100g.fat_g,
        )
    }
}

/// One requested line of a meal: an ingredient name and a weight in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItemRequest {
    pub name: String,
    #[serde(alias = "weight_g")]
    pub weight: f64,
}

impl MealItemRequest {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Build a meal from named items, resolving each name against `catalog`.
///
/// Every unknown name is collected before failing, and no meal is built unless all
/// of them resolve.
pub fn compose_meal(
    catalog: &IngredientCatalog,
    meal_name: &str,
    items: &[MealItemRequest],
) -> Result<Meal> {
    let mut meal = Meal::new(meal_name)?;

    let mut missing: Vec<String> = Vec::new();
    let mut resolved: Vec<(&Ingredient, f64)> = Vec::with_capacity(items.len());
    for item in items {
        match catalog.get(&item.name) {
            Some(ingredient) => resolved.push((ingredient, item.weight)),
            None => {
                if !missing.contains(&item.name) {
                    missing.push(item.name.clone());
                }
            }
        }
    }

    if !missing.is_empty() {
        tracing::debug!(?missing, "meal request references unknown ingredients");
        return Err(NutritionError::MissingIngredients(missing));
    }

    for (ingredient, weight) in resolved {
        meal.add_line(ingredient, weight)?;
    }
    Ok(meal)
}

/// Catalog names similar to `query`, best match first.
pub fn suggest_names(catalog: &IngredientCatalog, query: &str, limit: usize) -> Vec<String> {
    let query = query.to_lowercase();
    let mut candidates: Vec<(String, f64)> = catalog
        .list()
        .into_iter()
        .map(|name| {
            let score = jaro_winkler(&name.to_lowercase(), &query);
            (name, score)
        })
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
        .into_iter()
        .take(limit)
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn input(portion: Option<LooseNumber>) -> IngredientInput {
        IngredientInput {
            name: Some("Yogurt".to_string()),
            portion_size: portion,
            calories: Some(LooseNumber::Text("75".to_string())),
            protein: Some(LooseNumber::Number(5.0)),
            carbs: Some(LooseNumber::Text(" 6 ".to_string())),
            fat: Some(LooseNumber::Number(1.5)),
        }
    }

    #[test]
    fn test_input_normalizes_portion() {
        let yogurt = input(Some(LooseNumber::Number(150.0))).into_ingredient().unwrap();
        assert!((yogurt.calories() - 50.0).abs() < 1e-9);
        assert!((yogurt.protein_g() - 10.0 / 3.0).abs() < 1e-9);
        assert!((yogurt.fat_g() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_defaults_to_100g() {
        let yogurt = input(None).into_ingredient().unwrap();
        assert_eq!(yogurt.calories(), 75.0);
        assert_eq!(yogurt.carbs_g(), 6.0);
    }

    #[test]
    fn test_input_rejections() {
        assert!(input(Some(LooseNumber::Number(0.0))).into_ingredient().is_err());
        assert!(input(Some(LooseNumber::Text("abc".into()))).into_ingredient().is_err());

        let mut missing = input(None);
        missing.fat = None;
        let err = missing.into_ingredient().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields.");

        let mut negative = input(None);
        negative.protein = Some(LooseNumber::Number(-1.0));
        assert!(negative.into_ingredient().is_err());
    }

    fn catalog_with_chicken() -> (tempfile::TempDir, IngredientCatalog) {
        let dir = tempdir().unwrap();
        let mut catalog = IngredientCatalog::empty(dir.path().join("ingredients.json"));
        catalog
            .add(Ingredient::new("Chicken Breast", 165.0, 31.0, 0.0, 3.6).unwrap())
            .unwrap();
        (dir, catalog)
    }

    #[test]
    fn test_compose_collects_all_missing_names() {
        let (_dir, catalog) = catalog_with_chicken();
        let items = vec![
            MealItemRequest::new("Tofu", 100.0),
            MealItemRequest::new("Chicken Breast", 100.0),
            MealItemRequest::new("Kale", 50.0),
            MealItemRequest::new("Tofu", 20.0),
        ];

        match compose_meal(&catalog, "Dinner", &items) {
            Err(NutritionError::MissingIngredients(names)) => {
                assert_eq!(names, vec!["Tofu".to_string(), "Kale".to_string()]);
            }
            other => panic!("expected MissingIngredients, got {:?}", other),
        }
    }

    #[test]
    fn test_compose_builds_meal() {
        let (_dir, catalog) = catalog_with_chicken();
        let meal = compose_meal(
            &catalog,
            "Dinner",
            &[MealItemRequest::new("Chicken Breast", 200.0)],
        )
        .unwrap();
        assert_eq!(meal.total_nutrition().calories, 330.0);
    }

    #[test]
    fn test_compose_rejects_negative_weight() {
        let (_dir, catalog) = catalog_with_chicken();
        let result = compose_meal(
            &catalog,
            "Dinner",
            &[MealItemRequest::new("Chicken Breast", -5.0)],
        );
        assert!(matches!(result, Err(NutritionError::Validation(_))));
    }

    #[test]
    fn test_suggest_names() {
        let (_dir, catalog) = catalog_with_chicken();
        assert_eq!(
            suggest_names(&catalog, "chicken brest", 3),
            vec!["Chicken Breast".to_string()]
        );
        assert!(suggest_names(&catalog, "zzz", 3).is_empty());
    }
}
