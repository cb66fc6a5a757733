mod history;
mod ingredient;
mod meal;
mod nutrients;

pub use history::{HistoryEntry, HistorySummary};
pub use ingredient::Ingredient;
pub use meal::{
    IngredientUsed, LineItem, LineItemBreakdown, Meal, NutritionPer100g, TotalNutrition,
};
pub use nutrients::Nutrients;
