//! Error responses for the web API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::error::NutritionError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Ingredient '{0}' already exists. To update, please remove it first.")]
    Conflict(String),

    #[error("Ingredients not found: {}", .0.join(", "))]
    MissingIngredients(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("An unexpected error occurred.")]
    Internal(String),
}

/// `{"success": false, "message": ...}`, plus the unresolved names when relevant.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
}

impl From<NutritionError> for ApiError {
    fn from(err: NutritionError) -> Self {
        match err {
            NutritionError::Validation(msg) => ApiError::Validation(msg),
            NutritionError::DuplicateName(name) => ApiError::Conflict(name),
            NutritionError::MissingIngredients(names) => ApiError::MissingIngredients(names),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::MissingIngredients(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let missing = match &self {
            ApiError::MissingIngredients(names) => Some(names.clone()),
            _ => None,
        };

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
            missing,
        };
        (status, Json(body)).into_response()
    }
}
