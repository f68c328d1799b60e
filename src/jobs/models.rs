// src/jobs/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Job Models
// ============================================================================

/// Job status while accepting applications
pub const JOB_STATUS_OPEN: &str = "open";
/// Job status after an application was accepted
pub const JOB_STATUS_CLOSED: &str = "closed";

#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>, // JSON string in DB, will be parsed
    pub location: Option<String>,
    pub min_rate: Option<i64>,
    pub status: String,
    pub provider_id: String,
    pub created_at: Option<String>,
}

// Enhanced Job response with parsed categories array
#[derive(Serialize, Debug)]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub location: Option<String>,
    pub min_rate: Option<i64>,
    pub status: String,
    pub provider_id: String,
    pub created_at: Option<String>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        // Parse categories JSON string to Vec<String>
        let categories = job
            .categories
            .and_then(|c| serde_json::from_str::<Vec<String>>(&c).ok());

        JobResponse {
            id: job.id,
            title: job.title,
            description: job.description,
            categories,
            location: job.location,
            min_rate: job.min_rate,
            status: job.status,
            provider_id: job.provider_id,
            created_at: job.created_at,
        }
    }
}

/// Row for the seeker browse feed: listing fields plus the provider's
/// username
#[derive(FromRow, Serialize, Debug)]
pub struct JobWithProvider {
    pub id: String,
    pub title: String,
    pub location: Option<String>,
    pub min_rate: Option<i64>,
    pub status: String,
    pub provider_username: String,
    pub created_at: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct JobFeedResponse {
    pub jobs: Vec<JobWithProvider>,
    pub total: usize,
}

#[derive(Serialize, Debug)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
    pub total: usize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub location: Option<String>,
    pub min_rate: Option<i64>,
}
