use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("{0}")]
    Validation(String),

    #[error("Ingredient '{0}' already exists")]
    DuplicateName(String),

    #[error("Ingredients not found: {}", .0.join(", "))]
    MissingIngredients(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl NutritionError {
    pub fn validation(message: impl Into<String>) -> Self {
        NutritionError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, NutritionError>;
