mod catalog;
mod history_log;
mod persistence;

pub use catalog::IngredientCatalog;
pub use history_log::MealHistoryLog;
pub use persistence::{load_or_default, read_json, save_json};
