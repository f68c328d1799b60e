//! Authentication handlers

use axum::extract::{Extension, Json};
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::cookies;
use super::extractors::AuthedUser;
use super::models::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User, UserSummary,
};
use super::validators::RegistrationValidator;
use crate::common::helpers::safe_identifier_log;
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState, Validator};

/// POST /api/register
/// Creates a new user account
///
/// # Request Body
/// ```json
/// {
///   "username": "bob",
///   "password": "p1",
///   "confirmPassword": "p1",
///   "role": "jobseeker",
///   "personalInfo": { "fullName": "...", "email": "...", ... }
/// }
/// ```
///
/// # Response
/// ```json
/// { "id": "U_K7NP3X", "email": "bob@x.com" }
/// ```
pub async fn register(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation = RegistrationValidator.validate(&payload);
    if !validation.is_valid {
        warn!(errors = ?validation.errors, "Registration validation failed");
        return Err(ApiError::from(validation));
    }

    let email = payload.personal_info.email.trim().to_string();

    // Advisory pre-check; the unique index on email is the atomic guard
    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if existing.is_some() {
        warn!(
            email = %safe_email_log(&email),
            "Registration rejected: email already in use"
        );
        return Err(ApiError::Conflict("Email is already in use.".to_string()));
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST).map_err(|e| {
        error!(error = %e, "Password hashing failed during registration");
        ApiError::InternalServer("password hashing failed".to_string())
    })?;

    let id = generate_user_id();

    if let Err(e) = sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, role, full_name, phone_number, address, province, city)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(payload.username.trim())
    .bind(&email)
    .bind(&password_hash)
    .bind(&payload.role)
    .bind(&payload.personal_info.full_name)
    .bind(&payload.personal_info.phone_number)
    .bind(&payload.personal_info.address)
    .bind(&payload.personal_info.province)
    .bind(&payload.personal_info.city)
    .execute(&state.db)
    .await
    {
        // A concurrent registration can slip past the pre-check; the unique
        // index reports it here
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.message().contains("UNIQUE") {
                warn!(
                    email = %safe_email_log(&email),
                    "Registration rejected by unique email index"
                );
                return Err(ApiError::Conflict("Email is already in use.".to_string()));
            }
        }
        error!(
            error = %e,
            user_id = %id,
            "Database error inserting new user"
        );
        return Err(ApiError::DatabaseError(e));
    }

    info!(
        user_id = %id,
        email = %safe_email_log(&email),
        role = %payload.role,
        "New user registered"
    );

    Ok(Json(RegisterResponse { id, email }))
}

/// POST /api/login
/// Authenticates a user by email or username and sets the session cookie
///
/// # Request Body
/// ```json
/// { "emailOrUsername": "bob@x.com", "password": "p1" }
/// ```
///
/// # Response
/// ```json
/// { "message": "Login successful", "role": "jobseeker" }
/// ```
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    let (identifier, password) = match (payload.email_or_username, payload.password) {
        (Some(i), Some(p)) if !i.trim().is_empty() && !p.is_empty() => (i, p),
        _ => {
            warn!("Login rejected: missing credentials");
            return Err(ApiError::BadRequest(
                "Email/Username and password are required.".to_string(),
            ));
        }
    };

    let identifier = identifier.trim().to_string();

    // Email OR username match, first row wins
    let user: Option<User> = sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE email = ? OR username = ? LIMIT 1",
    )
    .bind(&identifier)
    .bind(&identifier)
    .fetch_optional(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let user = match user {
        Some(u) => u,
        None => {
            warn!(
                identifier = %safe_identifier_log(&identifier),
                "Login failed: user not found"
            );
            return Err(ApiError::NotFound("User not found.".to_string()));
        }
    };

    let password_ok = bcrypt::verify(&password, &user.password_hash).map_err(|e| {
        error!(error = %e, user_id = %user.id, "Password verification error");
        ApiError::InternalServer("password verification failed".to_string())
    })?;

    if !password_ok {
        warn!(user_id = %user.id, "Login failed: incorrect password");
        return Err(ApiError::Unauthorized("Incorrect password.".to_string()));
    }

    let token = state.tokens.issue(&user.id, &user.role).map_err(|e| {
        error!(error = %e, user_id = %user.id, "Session token signing failed");
        ApiError::InternalServer("token error".to_string())
    })?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        role = %user.role,
        "User logged in"
    );

    let headers = AppendHeaders([(
        SET_COOKIE,
        cookies::session_cookie(&token, state.secure_cookies),
    )]);

    Ok((
        headers,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            role: user.role,
        }),
    ))
}

/// POST /api/logout
/// Clears the session cookie
///
/// Idempotent: succeeds whether or not a session existed. The token itself
/// stays valid until natural expiry; only the client-held cookie goes away.
///
/// # Response
/// ```json
/// { "message": "Logout successful" }
/// ```
pub async fn logout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    info!("User logout");

    let headers = AppendHeaders([(
        SET_COOKIE,
        cookies::clear_session_cookie(state.secure_cookies),
    )]);

    Ok((
        headers,
        Json(serde_json::json!({ "message": "Logout successful" })),
    ))
}

/// GET /api/auth/me
/// Returns a summary of the currently authenticated user
///
/// # Response
/// ```json
/// { "id": "U_K7NP3X", "username": "bob", "role": "jobseeker", "city": "...", "province": "..." }
/// ```
pub async fn me(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<UserSummary>, ApiError> {
    let state = state_lock.read().await.clone();

    let summary = sqlx::query_as::<_, UserSummary>(
        "SELECT id, username, role, city, province FROM users WHERE id = ?",
    )
    .bind(&authed.id)
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(Json(summary))
}
