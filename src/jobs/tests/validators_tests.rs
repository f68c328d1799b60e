// src/jobs/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::jobs::models::*;
    use crate::jobs::validators::*;

    #[test]
    fn test_job_validator_valid_data() {
        let validator = JobValidator;
        let request = CreateJob {
            title: "Tukang Kebun".to_string(),
            description: Some("Weekly garden maintenance".to_string()),
            categories: Some(vec!["gardening".to_string(), "outdoor".to_string()]),
            location: Some("Depok, Jawa Barat".to_string()),
            min_rate: Some(50000),
        };

        let result = validator.validate(&request);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_job_validator_empty_title() {
        let validator = JobValidator;
        let request = CreateJob {
            title: "".to_string(),
            description: None,
            categories: None,
            location: None,
            min_rate: None,
        };

        let result = validator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "title"));
    }

    #[test]
    fn test_job_validator_negative_rate() {
        let validator = JobValidator;
        let request = CreateJob {
            title: "Tukang Kebun".to_string(),
            description: None,
            categories: None,
            location: None,
            min_rate: Some(-1),
        };

        let result = validator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "minRate"));
    }

    #[test]
    fn test_job_validator_too_many_categories() {
        let validator = JobValidator;
        let request = CreateJob {
            title: "Tukang Kebun".to_string(),
            description: None,
            categories: Some((0..21).map(|i| format!("category-{}", i)).collect()),
            location: None,
            min_rate: None,
        };

        let result = validator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "categories"));
    }

    #[test]
    fn test_job_response_parses_categories() {
        let job = Job {
            id: "J_K7NP3X".to_string(),
            title: "Tukang Kebun".to_string(),
            description: None,
            categories: Some(r#"["gardening","outdoor"]"#.to_string()),
            location: None,
            min_rate: Some(50000),
            status: JOB_STATUS_OPEN.to_string(),
            provider_id: "U_8MWQT2".to_string(),
            created_at: None,
        };

        let response: JobResponse = job.into();
        assert_eq!(
            response.categories,
            Some(vec!["gardening".to_string(), "outdoor".to_string()])
        );
        assert_eq!(response.status, "open");
    }
}
