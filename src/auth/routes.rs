//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/register` - Create a new account
/// - `POST /api/login` - Password login, sets the session cookie
/// - `POST /api/logout` - Clear the session cookie
/// - `GET /api/auth/me` - Get current user information
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::me))
}
