use axum::{routing::{delete, get, post}, Router, Extension};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{AppState, health_with_pool};
use crate::controllers;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|Extension(state): Extension<Arc<AppState>>| async move {
            health_with_pool(&state.pool).await
        }))
        .route(
            "/messages",
            post(controllers::send_message)
                .get(controllers::fetch_messages)
                .delete(controllers::delete_multiple_messages),
        )
        .route("/messages/new", get(controllers::fetch_new_messages))
        .route("/messages/:id", delete(controllers::delete_message))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}
