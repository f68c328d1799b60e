// src/applications/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Application Models
// ============================================================================

pub const APPLICATION_STATUS_PENDING: &str = "pending";
pub const APPLICATION_STATUS_ACCEPTED: &str = "accepted";
pub const APPLICATION_STATUS_REJECTED: &str = "rejected";

#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub seeker_id: String,
    pub status: String,
    pub created_at: Option<String>,
}

/// Row for the provider's review queue: application fields plus the job
/// title and the applicant's username
#[derive(FromRow, Serialize, Debug)]
pub struct PendingApplication {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub seeker_id: String,
    pub seeker_username: String,
    pub status: String,
    pub created_at: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ApplicationListResponse {
    pub applications: Vec<PendingApplication>,
    pub total: usize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    #[serde(default)]
    pub job_id: String,
}

#[derive(Serialize, Debug)]
pub struct ApplicationDecisionResponse {
    pub message: String,
}
