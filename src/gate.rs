// gate.rs
//! Session gate middleware
//!
//! Runs before every request and classifies the path. Public paths pass
//! through unconditionally; everything else needs a valid session cookie or
//! gets redirected to /login. Verification failures never surface as error
//! pages, only as redirects.

use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::auth::cookies;
use crate::common::AppState;

/// Paths reachable without authentication
///
/// Matched by exact string equality only; a trailing slash is a different
/// path and stays protected.
const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/register"];

fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// API endpoints enforce authentication per-handler through the AuthedUser
/// extractor, so the page gate leaves them alone
fn is_api_path(path: &str) -> bool {
    path.starts_with("/api/")
}

/// Session gate middleware
pub async fn session_gate(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if is_public_path(&path) || is_api_path(&path) {
        return next.run(request).await;
    }

    let token = match cookies::token_from_headers(request.headers()) {
        Some(t) => t,
        None => {
            debug!(path = %path, "No session cookie on protected path, redirecting to /login");
            return Redirect::to("/login").into_response();
        }
    };

    let state = state_lock.read().await.clone();

    match state.tokens.verify(&token) {
        Ok(claims) => {
            debug!(path = %path, user_id = %claims.sub, "Session gate passed");
            next.run(request).await
        }
        Err(e) => {
            warn!(path = %path, error = %e, "Session token rejected, redirecting to /login");
            Redirect::to("/login").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths_exact_match() {
        assert!(is_public_path("/"));
        assert!(is_public_path("/login"));
        assert!(is_public_path("/register"));
    }

    #[test]
    fn test_trailing_slash_is_protected() {
        assert!(!is_public_path("/login/"));
        assert!(!is_public_path("/register/"));
    }

    #[test]
    fn test_other_paths_are_protected() {
        assert!(!is_public_path("/dashboard"));
        assert!(!is_public_path("/seeker-dashboard"));
        assert!(!is_public_path("/login/extra"));
    }

    #[test]
    fn test_api_paths_bypass_the_page_gate() {
        assert!(is_api_path("/api/login"));
        assert!(is_api_path("/api/jobs"));
        assert!(!is_api_path("/api"));
        assert!(!is_api_path("/apification"));
        assert!(!is_api_path("/dashboard"));
    }
}
