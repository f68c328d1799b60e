//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Registration and password login
//! - Session token issuing and verification
//! - The session cookie transport
//! - AuthedUser extractor for protected routes

pub mod cookies;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod tokens;
pub mod validators;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use models::User;
pub use routes::auth_routes;
