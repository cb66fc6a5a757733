/// Reference portion all ingredient figures are stored against.
pub const REFERENCE_PORTION_G: f64 = 100.0;

/// Atwater energy factors (kcal per gram).
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARBS_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// How far macro-derived calories may exceed the stated calories before a warning.
pub const MACRO_CALORIE_TOLERANCE: f64 = 10.0;

/// Portion size assumed when the caller does not give one.
pub const DEFAULT_PORTION_G: f64 = REFERENCE_PORTION_G;

/// Minimum jaro-winkler score for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Default file names, shared by the CLI and the server.
pub const DEFAULT_INGREDIENTS_FILE: &str = "ingredient_database.json";
pub const DEFAULT_HISTORY_FILE: &str = "meal_history.json";
