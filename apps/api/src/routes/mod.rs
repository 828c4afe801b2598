pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::guidelines::handlers as guidelines;
use crate::messages::handlers as messages;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Message generation + saved messages
        .route("/api/v1/messages/generate", post(generation::handle_generate))
        .route(
            "/api/v1/messages",
            post(messages::handle_save).get(messages::handle_list),
        )
        .route(
            "/api/v1/messages/:id",
            get(messages::handle_get).delete(messages::handle_delete),
        )
        .route("/api/v1/messages/:id/improve", post(messages::handle_improve))
        // Brand guidelines
        .route(
            "/api/v1/guidelines",
            post(guidelines::handle_create).get(guidelines::handle_list),
        )
        .route("/api/v1/guidelines/active", get(guidelines::handle_get_active))
        .route(
            "/api/v1/guidelines/:id",
            get(guidelines::handle_get).put(guidelines::handle_update),
        )
        .route(
            "/api/v1/guidelines/:id/activate",
            post(guidelines::handle_activate),
        )
        // Templates
        .route(
            "/api/v1/templates",
            post(templates::handle_create).get(templates::handle_list),
        )
        .route("/api/v1/templates/categories", get(templates::handle_categories))
        .route("/api/v1/templates/:id", get(templates::handle_get))
        .with_state(state)
}
