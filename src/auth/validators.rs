// src/auth/validators.rs

use super::models::{RegisterRequest, ROLES};
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Registration Validator
// ============================================================================

pub struct RegistrationValidator;

impl Validator<RegisterRequest> for RegistrationValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require_non_empty("username", &data.username);

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        } else if data.password != data.confirm_password {
            result.add_error("confirmPassword", "Passwords do not match");
        }

        // Role must come from the closed set
        if data.role.trim().is_empty() {
            result.add_error("role", "Role is required");
        } else if !ROLES.contains(&data.role.as_str()) {
            result.add_error("role", "Invalid role");
        }

        let info = &data.personal_info;
        result.require_non_empty("personalInfo.fullName", &info.full_name);
        result.require_non_empty("personalInfo.phoneNumber", &info.phone_number);
        result.require_non_empty("personalInfo.address", &info.address);
        result.require_non_empty("personalInfo.province", &info.province);
        result.require_non_empty("personalInfo.city", &info.city);

        if info.email.trim().is_empty() {
            result.add_error("personalInfo.email", "Email is required");
        } else if !info.email.contains('@') {
            result.add_error("personalInfo.email", "Email must be valid");
        }

        result
    }
}
