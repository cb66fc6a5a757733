pub mod calculations;
pub mod compose;
pub mod constants;

pub use calculations::{normalize_to_per_100g, per_100g_of, round2};
pub use compose::{IngredientInput, LooseNumber, MealItemRequest, compose_meal, suggest_names};
pub use constants::*;
