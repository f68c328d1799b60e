// src/applications/handlers.rs

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::applications::models::*;
use crate::applications::validators::ApplicationValidator;
use crate::auth::models::{ROLE_JOBPROVIDER, ROLE_JOBSEEKER};
use crate::auth::AuthedUser;
use crate::common::{generate_application_id, ApiError, AppState, Validator};
use crate::jobs::models::{Job, JOB_STATUS_CLOSED, JOB_STATUS_OPEN};

/// POST /api/applications - Apply to an open job (seekers only)
pub async fn apply(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<CreateApplication>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let state = state_lock.read().await.clone();

    if authed.role != ROLE_JOBSEEKER {
        warn!(
            user_id = %authed.id,
            role = %authed.role,
            "Application rejected: caller is not a seeker"
        );
        return Err(ApiError::Forbidden("Not a seeker.".to_string()));
    }

    let validation = ApplicationValidator.validate(&payload);
    if !validation.is_valid {
        warn!(
            user_id = %authed.id,
            errors = ?validation.errors,
            "Application validation failed"
        );
        return Err(ApiError::from(validation));
    }

    let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&payload.job_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound(format!("Job not found: {}", payload.job_id)))?;

    if job.status != JOB_STATUS_OPEN {
        warn!(
            job_id = %job.id,
            seeker_id = %authed.id,
            status = %job.status,
            "Application rejected: job is not open"
        );
        return Err(ApiError::BadRequest("Job is closed.".to_string()));
    }

    // One pending application per seeker per job
    let pending_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM applications WHERE job_id = ? AND seeker_id = ? AND status = 'pending'",
    )
    .bind(&job.id)
    .bind(&authed.id)
    .fetch_one(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    if pending_count > 0 {
        warn!(
            job_id = %job.id,
            seeker_id = %authed.id,
            "Application rejected: already pending for this job"
        );
        return Err(ApiError::BadRequest(
            "Application already pending for this job.".to_string(),
        ));
    }

    let id = generate_application_id();

    sqlx::query(
        "INSERT INTO applications (id, job_id, seeker_id, status) VALUES (?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&job.id)
    .bind(&authed.id)
    .bind(APPLICATION_STATUS_PENDING)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            application_id = %id,
            job_id = %job.id,
            "Database error inserting new application"
        );
        ApiError::DatabaseError(e)
    })?;

    let application = sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = ?")
        .bind(&id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(
        application_id = %id,
        job_id = %job.id,
        seeker_id = %authed.id,
        "Application submitted"
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/pending - Pending applications across the caller's
/// jobs, oldest first (providers only)
pub async fn list_pending(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<ApplicationListResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    if authed.role != ROLE_JOBPROVIDER {
        warn!(
            user_id = %authed.id,
            role = %authed.role,
            "Pending application listing rejected: caller is not a provider"
        );
        return Err(ApiError::Forbidden("Not a provider.".to_string()));
    }

    let applications = sqlx::query_as::<_, PendingApplication>(
        r#"
        SELECT a.id, a.job_id, j.title AS job_title,
               a.seeker_id, u.username AS seeker_username,
               a.status, a.created_at
        FROM applications a
        JOIN jobs j ON j.id = a.job_id
        JOIN users u ON u.id = a.seeker_id
        WHERE j.provider_id = ? AND a.status = 'pending'
        ORDER BY a.created_at ASC
        "#,
    )
    .bind(&authed.id)
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    debug!(
        provider_id = %authed.id,
        application_count = applications.len(),
        "Loaded pending applications"
    );

    let total = applications.len();
    Ok(Json(ApplicationListResponse { applications, total }))
}

/// POST /api/applications/:id/accept - Accept an application and close its
/// job (owning provider only)
pub async fn accept(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(application_id): Path<String>,
) -> Result<Json<ApplicationDecisionResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let (application, job) = load_owned_application(&state, &application_id, &authed).await?;

    sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
        .bind(APPLICATION_STATUS_ACCEPTED)
        .bind(&application.id)
        .execute(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    sqlx::query("UPDATE jobs SET status = ? WHERE id = ?")
        .bind(JOB_STATUS_CLOSED)
        .bind(&job.id)
        .execute(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(
        application_id = %application.id,
        job_id = %job.id,
        provider_id = %authed.id,
        "Application accepted, job closed"
    );

    Ok(Json(ApplicationDecisionResponse {
        message: "Application accepted.".to_string(),
    }))
}

/// POST /api/applications/:id/reject - Reject an application; the job stays
/// open (owning provider only)
pub async fn reject(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(application_id): Path<String>,
) -> Result<Json<ApplicationDecisionResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let (application, job) = load_owned_application(&state, &application_id, &authed).await?;

    sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
        .bind(APPLICATION_STATUS_REJECTED)
        .bind(&application.id)
        .execute(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    info!(
        application_id = %application.id,
        job_id = %job.id,
        provider_id = %authed.id,
        "Application rejected"
    );

    Ok(Json(ApplicationDecisionResponse {
        message: "Application rejected.".to_string(),
    }))
}

// ---- Helper Functions ----

/// Load an application and its job, enforcing that the caller is the
/// provider who owns the job
async fn load_owned_application(
    state: &AppState,
    application_id: &str,
    authed: &AuthedUser,
) -> Result<(Application, Job), ApiError> {
    if authed.role != ROLE_JOBPROVIDER {
        warn!(
            user_id = %authed.id,
            role = %authed.role,
            "Application decision rejected: caller is not a provider"
        );
        return Err(ApiError::Forbidden("Not a provider.".to_string()));
    }

    let application = sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = ?")
        .bind(application_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Application not found: {}", application_id))
        })?;

    let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
        .bind(&application.job_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| {
            error!(
                application_id = %application.id,
                job_id = %application.job_id,
                "Application references a missing job"
            );
            ApiError::InternalServer("application is not associated with a job".to_string())
        })?;

    if job.provider_id != authed.id {
        warn!(
            application_id = %application.id,
            job_id = %job.id,
            provider_id = %authed.id,
            "Application decision rejected: caller does not own the job"
        );
        return Err(ApiError::Forbidden(
            "Application belongs to another provider's job.".to_string(),
        ));
    }

    Ok((application, job))
}
