use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    HistoryEntry, HistorySummary, IngredientUsed, Meal, NutritionPer100g, TotalNutrition,
};
use crate::state::persistence::{load_or_default, save_json};

/// Append-only log of saved meals, mirrored to a JSON array on disk.
///
/// Every append and delete rewrites the file.
pub struct MealHistoryLog {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl MealHistoryLog {
    /// Load the log at `path`. A missing or malformed file yields an empty log.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = load_or_default(&path, "meal history");
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a computed meal and persist the log.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        ingredients_used: Vec<IngredientUsed>,
        total_nutrition: TotalNutrition,
        nutrition_per_100g: NutritionPer100g,
    ) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            name: name.into(),
            timestamp: Utc::now(),
            ingredients_used,
            total_nutrition,
            nutrition_per_100g,
        };

        tracing::info!(id = %entry.id, meal = %entry.name, "meal saved to history");
        self.entries.push(entry.clone());
        self.persist();
        entry
    }

    /// Snapshot `meal` into the log.
    pub fn append_meal(&mut self, meal: &Meal) -> HistoryEntry {
        self.append(
            meal.name(),
            meal.ingredients_used(),
            meal.total_nutrition(),
            meal.nutrition_per_100g(),
        )
    }

    /// Summaries, most recent first. Equal timestamps keep log order.
    pub fn list_summaries(&self) -> Vec<HistorySummary> {
        let mut sorted: Vec<&HistoryEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.into_iter().map(HistoryEntry::summary).collect()
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Delete by id, persisting on success. Returns whether anything was removed.
    pub fn delete_by_id(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);

        if self.entries.len() < before {
            tracing::info!(%id, "history entry deleted");
            self.persist();
            true
        } else {
            false
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn save(&self) -> Result<()> {
        save_json(&self.path, &self.entries)
    }

    /// Save, logging failures. Returns whether the write succeeded.
    pub fn persist(&self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to save meal history"
                );
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;
    use chrono::{Duration, Utc};
    use std::fs;
    use tempfile::tempdir;

    fn sample_meal(name: &str) -> Meal {
        let chicken = Ingredient::new("Chicken", 165.0, 31.0, 0.0, 3.6).unwrap();
        let mut meal = Meal::new(name).unwrap();
        meal.add_line(&chicken, 100.0).unwrap();
        meal
    }

    #[test]
    fn test_append_get_delete() {
        let dir = tempdir().unwrap();
        let mut log = MealHistoryLog::load(dir.path().join("history.json"));

        let entry = log.append_meal(&sample_meal("Lunch"));
        assert_eq!(entry.name, "Lunch");
        assert_eq!(entry.total_nutrition.calories, 165.0);
        assert_eq!(log.get_by_id(entry.id), Some(&entry));

        assert!(log.delete_by_id(entry.id));
        assert!(log.get_by_id(entry.id).is_none());
        assert!(!log.delete_by_id(entry.id));
    }

    #[test]
    fn test_append_persists_immediately() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut log = MealHistoryLog::load(&path);
        let entry = log.append_meal(&sample_meal("Lunch"));

        let reloaded = MealHistoryLog::load(&path);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.entries()[0], entry);
    }

    #[test]
    fn test_summaries_most_recent_first_with_stable_ties() {
        let dir = tempdir().unwrap();
        let mut log = MealHistoryLog::load(dir.path().join("history.json"));

        let a = log.append_meal(&sample_meal("A"));
        let b = log.append_meal(&sample_meal("B"));
        let c = log.append_meal(&sample_meal("C"));

        let now = Utc::now();
        log.entries[0].timestamp = now - Duration::hours(1);
        log.entries[1].timestamp = now;
        log.entries[2].timestamp = now;

        let ids: Vec<Uuid> = log.list_summaries().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![b.id, c.id, a.id]);
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "this is not json").unwrap();

        let log = MealHistoryLog::load(&path);
        assert!(log.is_empty());
    }

    #[test]
    fn test_loads_legacy_entry_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"[{
                "id": "2f1c7d2e-4a9e-4d35-9b43-8e8b1c1f0a11",
                "name": "Lunch Delight",
                "timestamp": "2024-05-01T12:30:00.123456+00:00",
                "ingredients_used": [{"name": "Chicken", "weight_g": 100}],
                "total_nutrition": {"total_calories": 500, "total_protein_g": 40,
                    "total_carbs_g": 10, "total_fat_g": 5, "total_weight_g": 250},
                "nutrition_per_100g": {"calories_per_100g": 200, "protein_per_100g": 16,
                    "carbs_per_100g": 4, "fat_per_100g": 2}
            }]"#,
        )
        .unwrap();

        let log = MealHistoryLog::load(&path);
        assert_eq!(log.len(), 1);
        let summary = &log.list_summaries()[0];
        assert_eq!(summary.name, "Lunch Delight");
        assert_eq!(summary.total_calories, 500.0);
    }
}
