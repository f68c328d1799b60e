// src/applications/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the applications router with all application-related routes
pub fn applications_routes() -> Router {
    Router::new()
        .route("/api/applications", post(handlers::apply))
        .route("/api/applications/pending", get(handlers::list_pending))
        .route("/api/applications/:id/accept", post(handlers::accept))
        .route("/api/applications/:id/reject", post(handlers::reject))
}
