//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use super::cookies;
use super::models::User;
use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated user extractor
///
/// This extractor validates the session cookie and loads the user row
/// backing it. API handlers use it to require authentication; role checks
/// stay in the handlers.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Extension containing the AppState
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = match cookies::token_from_headers(&parts.headers) {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing session cookie");
                return Err(ApiError::Unauthorized("missing session".into()));
            }
        };

        let claims = match app_state.tokens.verify(&token) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Session token validation failed");
                return Err(ApiError::Unauthorized("invalid token".into()));
            }
        };

        // Look up user in database
        let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(&claims.sub)
            .fetch_optional(&app_state.db)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    user_id = %claims.sub,
                    "Database error during user lookup in authentication"
                );
                ApiError::DatabaseError(e)
            })?;

        match user {
            Some(u) => {
                debug!(
                    user_id = %u.id,
                    email = %safe_email_log(&u.email),
                    role = %u.role,
                    "User authentication successful via extractor"
                );
                Ok(AuthedUser {
                    id: u.id,
                    username: u.username,
                    role: u.role,
                })
            }
            None => {
                warn!(user_id = %claims.sub, "Authentication failed: user not found in database");
                Err(ApiError::Unauthorized("user not found".into()))
            }
        }
    }
}
