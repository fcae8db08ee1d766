pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume/generate", post(handlers::handle_generate))
        .route("/api/v1/resume/list", get(handlers::handle_list))
        .route("/api/v1/resume/:id", delete(handlers::handle_delete))
        .with_state(state)
}
