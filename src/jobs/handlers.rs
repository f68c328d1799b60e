// src/jobs/handlers.rs

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::auth::models::ROLE_JOBPROVIDER;
use crate::auth::AuthedUser;
use crate::common::{generate_job_id, ApiError, AppState, Validator};
use crate::jobs::models::*;
use crate::jobs::validators::JobValidator;

/// POST /api/jobs - Create a job listing (providers only)
pub async fn create_job(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<CreateJob>,
) -> Result<(StatusCode, Json<JobResponse>), ApiError> {
    let state = state_lock.read().await.clone();

    if authed.role != ROLE_JOBPROVIDER {
        warn!(
            user_id = %authed.id,
            role = %authed.role,
            "Job creation rejected: caller is not a provider"
        );
        return Err(ApiError::Forbidden("Not a provider.".to_string()));
    }

    let validation = JobValidator.validate(&payload);
    if !validation.is_valid {
        warn!(
            user_id = %authed.id,
            errors = ?validation.errors,
            "Job creation validation failed"
        );
        return Err(ApiError::from(validation));
    }

    // Categories are stored as a JSON array string
    let categories = payload
        .categories
        .as_ref()
        .map(|c| serde_json::to_string(c))
        .transpose()
        .map_err(|e| {
            error!(error = %e, "Failed to serialize job categories");
            ApiError::InternalServer("failed to encode categories".to_string())
        })?;

    let id = generate_job_id();

    sqlx::query(
        r#"
        INSERT INTO jobs (id, title, description, categories, location, min_rate, status, provider_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(payload.title.trim())
    .bind(payload.description.as_deref())
    .bind(categories.as_deref())
    .bind(payload.location.as_deref())
    .bind(payload.min_rate)
    .bind(JOB_STATUS_OPEN)
    .bind(&authed.id)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            job_id = %id,
            provider_id = %authed.id,
            "Database error inserting new job"
        );
        ApiError::DatabaseError(e)
    })?;

    // fetch back
    let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(
        job_id = %id,
        provider_id = %authed.id,
        title = %job.title,
        "Job listing created"
    );

    Ok((StatusCode::CREATED, Json(job.into())))
}

/// GET /api/jobs - List open jobs for browsing, newest first
pub async fn list_open_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
) -> Result<Json<JobFeedResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let jobs = sqlx::query_as::<_, JobWithProvider>(
        r#"
        SELECT j.id, j.title, j.location, j.min_rate, j.status,
               u.username AS provider_username, j.created_at
        FROM jobs j
        JOIN users u ON u.id = j.provider_id
        WHERE j.status = 'open'
        ORDER BY j.created_at DESC
        "#,
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    debug!(job_count = jobs.len(), "Loaded open jobs feed");

    let total = jobs.len();
    Ok(Json(JobFeedResponse { jobs, total }))
}

/// GET /api/jobs/mine - List the caller's own listings (providers only)
pub async fn list_my_jobs(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<JobListResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    if authed.role != ROLE_JOBPROVIDER {
        warn!(
            user_id = %authed.id,
            role = %authed.role,
            "Job listing rejected: caller is not a provider"
        );
        return Err(ApiError::Forbidden("Not a provider.".to_string()));
    }

    let jobs = sqlx::query_as::<_, Job>(
        "SELECT * FROM jobs WHERE provider_id = ? ORDER BY created_at DESC",
    )
    .bind(&authed.id)
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    debug!(
        provider_id = %authed.id,
        job_count = jobs.len(),
        "Loaded provider's own jobs"
    );

    let job_responses: Vec<JobResponse> = jobs.into_iter().map(|j| j.into()).collect();
    let total = job_responses.len();

    Ok(Json(JobListResponse {
        jobs: job_responses,
        total,
    }))
}

/// GET /api/jobs/:id - Get a specific job by ID
pub async fn get_job_by_id(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _authed: AuthedUser,
    Path(job_id): Path<String>,
) -> Result<Json<JobResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&job_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Job not found: {}", job_id)))?;

    debug!(job_id = %job_id, job_title = %job.title, "Loaded job details");

    Ok(Json(job.into()))
}
