use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{IngredientUsed, NutritionPer100g, TotalNutrition};

/// A saved snapshot of a computed meal.
///
/// Holds copies of everything it shows; it does not refer back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub ingredients_used: Vec<IngredientUsed>,
    pub total_nutrition: TotalNutrition,
    pub nutrition_per_100g: NutritionPer100g,
}

impl HistoryEntry {
    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            id: self.id,
            name: self.name.clone(),
            timestamp: self.timestamp,
            total_calories: self.total_nutrition.calories,
        }
    }
}

/// One row of the history listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub id: Uuid,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub total_calories: f64,
}
