//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role for users who look for work
pub const ROLE_JOBSEEKER: &str = "jobseeker";
/// Role for users who post work
pub const ROLE_JOBPROVIDER: &str = "jobprovider";

/// The closed set of account roles
pub const ROLES: [&str; 2] = [ROLE_JOBSEEKER, ROLE_JOBPROVIDER];

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

/// User database model
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub full_name: String,
    pub phone_number: String,
    pub address: String,
    pub province: String,
    pub city: String,
    pub created_at: Option<String>,
}

/// Registration payload for POST /api/register
///
/// String fields default to empty so that missing fields surface as
/// validation errors instead of deserialization rejections.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub personal_info: PersonalInfo,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
}

/// Login payload for POST /api/login
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_username: Option<String>,
    pub password: Option<String>,
}

/// Response body for a successful registration
#[derive(Serialize, Debug)]
pub struct RegisterResponse {
    pub id: String,
    pub email: String,
}

/// Response body for a successful login
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub role: String,
}

/// Summary of the authenticated user for GET /api/auth/me
#[derive(FromRow, Serialize, Debug)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub role: String,
    pub city: String,
    pub province: String,
}
