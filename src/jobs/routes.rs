// src/jobs/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the jobs router with all job-related routes
pub fn jobs_routes() -> Router {
    Router::new()
        .route(
            "/api/jobs",
            get(handlers::list_open_jobs).post(handlers::create_job),
        )
        .route("/api/jobs/mine", get(handlers::list_my_jobs))
        .route("/api/jobs/:id", get(handlers::get_job_by_id))
}
