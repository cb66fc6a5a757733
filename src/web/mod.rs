//! Web API over the ingredient catalog and meal history.

pub mod error;
pub mod handlers;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::{IngredientCatalog, MealHistoryLog};
use crate::web::error::{ApiError, ApiResult};

/// Stores shared by all handlers. Built by the caller and injected into the router.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<IngredientCatalog>>,
    pub history: Arc<Mutex<MealHistoryLog>>,
}

impl AppState {
    pub fn new(catalog: IngredientCatalog, history: MealHistoryLog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            history: Arc::new(Mutex::new(history)),
        }
    }

    pub fn catalog(&self) -> ApiResult<MutexGuard<'_, IngredientCatalog>> {
        self.catalog
            .lock()
            .map_err(|_| ApiError::Internal("ingredient catalog lock poisoned".to_string()))
    }

    pub fn history(&self) -> ApiResult<MutexGuard<'_, MealHistoryLog>> {
        self.history
            .lock()
            .map_err(|_| ApiError::Internal("meal history lock poisoned".to_string()))
    }
}

/// Build the application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ingredients",
            get(handlers::list_ingredients).post(handlers::add_ingredient),
        )
        // Legacy path used by the ingredient entry form.
        .route("/add_ingredient", post(handlers::add_ingredient))
        .route(
            "/ingredients/:name",
            get(handlers::get_ingredient).delete(handlers::delete_ingredient),
        )
        .route("/meals/calculate", post(handlers::calculate_meal))
        .route("/history", get(handlers::list_history))
        .route(
            "/history/:id",
            get(handlers::get_history_entry).delete(handlers::delete_history_entry),
        )
}
