use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use crate::error::{NutritionError, Result};
use crate::models::Ingredient;
use crate::state::persistence::{load_or_default, save_json};

/// Name-keyed ingredient collection mirrored to a JSON object on disk.
///
/// The in-memory map is the source of truth; [`IngredientCatalog::persist`] rewrites
/// the whole file.
pub struct IngredientCatalog {
    path: PathBuf,
    ingredients: HashMap<String, Ingredient>,
}

impl IngredientCatalog {
    /// Load the catalog stored at `path`.
    ///
    /// Never fails: a missing or malformed file yields an empty catalog (logged).
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let stored: HashMap<String, Ingredient> = load_or_default(&path, "ingredient catalog");

        // Records stored under their own name come first, then the rest in key order,
        // so a name collision always resolves the same way.
        let mut records: Vec<(String, Ingredient)> = stored.into_iter().collect();
        records.sort_by(|(ka, a), (kb, b)| {
            (ka != a.name())
                .cmp(&(kb != b.name()))
                .then_with(|| ka.cmp(kb))
        });

        let mut ingredients: HashMap<String, Ingredient> = HashMap::with_capacity(records.len());
        for (key, ingredient) in records {
            if key != ingredient.name() {
                tracing::warn!(
                    key = %key,
                    name = ingredient.name(),
                    "stored key does not match ingredient name; keying by name"
                );
            }

            match ingredients.entry(ingredient.name().to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(ingredient);
                }
                Entry::Occupied(kept) => {
                    tracing::error!(
                        path = %path.display(),
                        key = %key,
                        name = ingredient.name(),
                        dropped = ?ingredient,
                        kept = ?kept.get(),
                        "duplicate ingredient name in catalog file; DROPPING record"
                    );
                }
            }
        }

        Self { path, ingredients }
    }

    /// An empty catalog that will persist to `path`.
    pub fn empty<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ingredients: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a new ingredient. Fails with `DuplicateName` if the name is taken.
    pub fn add(&mut self, ingredient: Ingredient) -> Result<()> {
        if self.ingredients.contains_key(ingredient.name()) {
            return Err(NutritionError::DuplicateName(ingredient.name().to_string()));
        }

        tracing::info!(ingredient = ingredient.name(), "ingredient added");
        self.ingredients
            .insert(ingredient.name().to_string(), ingredient);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains_key(name)
    }

    /// All ingredient names, sorted alphabetically.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ingredients.keys().cloned().collect();
        names.sort();
        names
    }

    /// All ingredients, sorted by name.
    pub fn iter_sorted(&self) -> Vec<&Ingredient> {
        let mut all: Vec<&Ingredient> = self.ingredients.values().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    /// Remove by name. Returns `false` if there was nothing to remove.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.ingredients.remove(name).is_some();
        if removed {
            tracing::info!(ingredient = name, "ingredient removed");
        } else {
            tracing::debug!(ingredient = name, "remove: ingredient not found");
        }
        removed
    }

    /// Write the whole catalog to disk.
    pub fn save(&self) -> Result<()> {
        save_json(&self.path, &self.ingredients)
    }

    /// Like [`save`](Self::save) but logs failures instead of returning them.
    ///
    /// In-memory state is kept either way. Returns whether the write succeeded.
    pub fn persist(&self) -> bool {
        match self.save() {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "ingredient catalog saved");
                true
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to save ingredient catalog"
                );
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
