// src/applications/validators.rs

use super::models::CreateApplication;
use crate::common::{ValidationResult, Validator};

pub struct ApplicationValidator;

impl Validator<CreateApplication> for ApplicationValidator {
    fn validate(&self, data: &CreateApplication) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.job_id.trim().is_empty() {
            result.add_error("jobId", "Job ID is required");
        }

        result
    }
}
