//! HTTP handlers for ingredients, meal calculation and meal history.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    HistoryEntry, HistorySummary, Ingredient, LineItemBreakdown, NutritionPer100g,
    TotalNutrition,
};
use crate::nutrition::{IngredientInput, MealItemRequest, compose_meal};
use crate::web::AppState;
use crate::web::error::{ApiError, ApiResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

impl MessageBody {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateMealRequest {
    pub name: String,
    pub ingredients: Vec<MealItemRequest>,
    /// Also append the result to the meal history.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MealReport {
    pub name: String,
    pub line_items: Vec<LineItemBreakdown>,
    pub total_nutrition: TotalNutrition,
    pub nutrition_per_100g: NutritionPer100g,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_entry: Option<HistoryEntry>,
}

/// Service banner.
pub async fn root() -> &'static str {
    "Nutrition Tracker API"
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// List all ingredients, sorted by name.
pub async fn list_ingredients(State(state): State<AppState>) -> ApiResult<Json<Vec<Ingredient>>> {
    let catalog = state.catalog()?;
    let all = catalog.iter_sorted().into_iter().cloned().collect();
    Ok(Json(all))
}

/// Get one ingredient by name.
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Ingredient>> {
    let catalog = state.catalog()?;
    catalog
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Ingredient '{}' not found.", name)))
}

/// Add an ingredient given for an arbitrary portion size.
pub async fn add_ingredient(
    State(state): State<AppState>,
    Json(input): Json<IngredientInput>,
) -> ApiResult<Json<MessageBody>> {
    let ingredient = input.into_ingredient().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected ingredient input");
    })?;
    let name = ingredient.name().to_string();

    let mut catalog = state.catalog()?;
    catalog.add(ingredient)?;
    catalog.persist();

    Ok(MessageBody::ok(format!("Ingredient '{}' added successfully.", name)))
}

/// Remove an ingredient by name.
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<MessageBody>> {
    let mut catalog = state.catalog()?;
    if !catalog.remove(&name) {
        return Err(ApiError::NotFound(format!("Ingredient '{}' not found.", name)));
    }
    catalog.persist();

    Ok(MessageBody::ok(format!("Ingredient '{}' removed.", name)))
}

/// Compute a meal's nutrition and optionally save it to history.
pub async fn calculate_meal(
    State(state): State<AppState>,
    Json(request): Json<CalculateMealRequest>,
) -> ApiResult<Json<MealReport>> {
    let meal = {
        let catalog = state.catalog()?;
        compose_meal(&catalog, &request.name, &request.ingredients)?
    };

    let history_entry = if request.save {
        let mut history = state.history()?;
        Some(history.append_meal(&meal))
    } else {
        None
    };

    Ok(Json(MealReport {
        name: meal.name().to_string(),
        line_items: meal.line_items(),
        total_nutrition: meal.total_nutrition(),
        nutrition_per_100g: meal.nutrition_per_100g(),
        history_entry,
    }))
}

/// List saved meals, most recent first.
pub async fn list_history(State(state): State<AppState>) -> ApiResult<Json<Vec<HistorySummary>>> {
    let history = state.history()?;
    Ok(Json(history.list_summaries()))
}

/// Get one saved meal.
pub async fn get_history_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<HistoryEntry>> {
    let history = state.history()?;
    parse_id(&id)
        .and_then(|id| history.get_by_id(id).cloned())
        .map(Json)
        .ok_or_else(|| meal_not_found(&id))
}

/// Delete one saved meal.
pub async fn delete_history_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageBody>> {
    let mut history = state.history()?;
    match parse_id(&id) {
        Some(uuid) if history.delete_by_id(uuid) => Ok(MessageBody::ok("Meal deleted.")),
        _ => Err(meal_not_found(&id)),
    }
}

/// Ids that are not UUIDs cannot match anything, so they are simply not found.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

fn meal_not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("Meal '{}' not found.", id))
}
