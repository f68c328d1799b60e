// src/applications/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::applications::models::*;
    use crate::applications::validators::*;
    use crate::common::Validator;

    #[test]
    fn test_application_validator_valid_data() {
        let validator = ApplicationValidator;
        let request = CreateApplication {
            job_id: "J_K7NP3X".to_string(),
        };

        let result = validator.validate(&request);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_application_validator_missing_job_id() {
        let validator = ApplicationValidator;
        let request = CreateApplication {
            job_id: "".to_string(),
        };

        let result = validator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "jobId"));
    }

    #[test]
    fn test_application_status_constants() {
        assert_eq!(APPLICATION_STATUS_PENDING, "pending");
        assert_eq!(APPLICATION_STATUS_ACCEPTED, "accepted");
        assert_eq!(APPLICATION_STATUS_REJECTED, "rejected");
    }
}
