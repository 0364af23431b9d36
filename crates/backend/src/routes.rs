use axum::{
    routing::{get, put},
    Router,
};
use sea_orm::DatabaseConnection;

use crate::handlers;

/// Shared per-request state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// All application routes bound to `state`
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // HABITS
        // ========================================
        .route(
            "/habits",
            get(handlers::a001_habit::list_all).post(handlers::a001_habit::create),
        )
        .route(
            "/habits/:id",
            get(handlers::a001_habit::get_by_id)
                .put(handlers::a001_habit::update)
                .patch(handlers::a001_habit::patch)
                .delete(handlers::a001_habit::delete),
        )
        // ========================================
        // HABIT TAGS
        // ========================================
        .route("/habits/:id/tags", put(handlers::a003_habit_tag::upsert))
        .route(
            "/habits/:id/tags/:tag_id",
            axum::routing::delete(handlers::a003_habit_tag::remove),
        )
        // ========================================
        // TAGS
        // ========================================
        .route(
            "/tags",
            get(handlers::a002_tag::list_all).post(handlers::a002_tag::create),
        )
        .route(
            "/tags/:id",
            get(handlers::a002_tag::get_by_id)
                .put(handlers::a002_tag::update)
                .delete(handlers::a002_tag::delete),
        )
        .with_state(state)
}
