pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod nutrition;
pub mod state;
pub mod web;

pub use error::{NutritionError, Result};
pub use models::{HistoryEntry, Ingredient, Meal, Nutrients};
pub use state::{IngredientCatalog, MealHistoryLog};
