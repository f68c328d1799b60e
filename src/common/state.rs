// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::tokens::TokenService;

/// Application state containing the database pool, the session token
/// service, and cookie configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: Arc<TokenService>,
    /// Set the Secure attribute on session cookies (production only)
    pub secure_cookies: bool,
}
