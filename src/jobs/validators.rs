// src/jobs/validators.rs

use super::models::CreateJob;
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Job Validators
// ============================================================================

pub struct JobValidator;

impl Validator<CreateJob> for JobValidator {
    fn validate(&self, data: &CreateJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Validate title
        if data.title.trim().is_empty() {
            result.add_error("title", "Job title is required");
        } else if data.title.len() > 255 {
            result.add_error("title", "Job title must be less than 255 characters");
        }

        // Validate description length if provided
        if let Some(description) = &data.description {
            if description.len() > 10000 {
                result.add_error(
                    "description",
                    "Description must be less than 10000 characters",
                );
            }
        }

        // Validate location length if provided
        if let Some(location) = &data.location {
            if location.len() > 255 {
                result.add_error("location", "Location must be less than 255 characters");
            }
        }

        // Validate categories if provided
        if let Some(categories) = &data.categories {
            if categories.len() > 20 {
                result.add_error("categories", "Cannot attach more than 20 categories");
            }
            for (index, category) in categories.iter().enumerate() {
                if category.trim().is_empty() {
                    result.add_error(
                        &format!("categories[{}]", index),
                        "Category cannot be empty",
                    );
                }
            }
        }

        // Validate rate if provided
        if let Some(min_rate) = data.min_rate {
            if min_rate < 0 {
                result.add_error("minRate", "Minimum rate cannot be negative");
            }
        }

        result
    }
}
