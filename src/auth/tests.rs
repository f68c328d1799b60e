//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Session token issuing and validation
//! - Session cookie attributes and parsing
//! - Registration payload validation

#[cfg(test)]
mod tests {
    use super::super::cookies;
    use super::super::models::{Claims, PersonalInfo, RegisterRequest};
    use super::super::tokens::TokenService;
    use super::super::validators::RegistrationValidator;
    use crate::common::Validator;
    use axum::http::HeaderMap;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    fn valid_register_request() -> RegisterRequest {
        RegisterRequest {
            username: "bob".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
            role: "jobseeker".to_string(),
            personal_info: PersonalInfo {
                full_name: "Bob Builder".to_string(),
                email: "bob@x.com".to_string(),
                phone_number: "+6281234567890".to_string(),
                address: "Jalan Kober No 1".to_string(),
                province: "Jawa Barat".to_string(),
                city: "Depok".to_string(),
            },
        }
    }

    #[test]
    fn test_claims_structure() {
        let claims = Claims {
            sub: "U_K7NP3X".to_string(),
            role: "jobseeker".to_string(),
            exp: 1234567890,
        };

        assert_eq!(claims.sub, "U_K7NP3X");
        assert_eq!(claims.role, "jobseeker");
        assert_eq!(claims.exp, 1234567890);
    }

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::new("test_secret_key");

        let token = service
            .issue("U_K7NP3X", "jobprovider")
            .expect("Failed to issue token");
        let claims = service.verify(&token).expect("Failed to verify token");

        assert_eq!(claims.sub, "U_K7NP3X");
        assert_eq!(claims.role, "jobprovider");
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let issuer = TokenService::new("test_secret_key");
        let verifier = TokenService::new("wrong_secret_key");

        let token = issuer
            .issue("U_K7NP3X", "jobseeker")
            .expect("Failed to issue token");

        assert!(
            verifier.verify(&token).is_err(),
            "Token validation should fail with wrong secret"
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test_secret_key";
        let service = TokenService::new(secret);

        // Encode a token that expired long ago with the same secret
        let claims = Claims {
            sub: "U_K7NP3X".to_string(),
            role: "jobseeker".to_string(),
            exp: 1000,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to encode token");

        assert!(
            service.verify(&token).is_err(),
            "Expired token should be rejected"
        );
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = cookies::session_cookie("abc123", false);

        assert!(cookie.starts_with("token=abc123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        let cookie = cookies::session_cookie("abc123", true);
        assert!(cookie.contains("Secure"));
    }

    #[test]
    fn test_clear_session_cookie() {
        let cookie = cookies::clear_session_cookie(false);

        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            "theme=dark; token=abc123; lang=id".parse().unwrap(),
        );

        assert_eq!(
            cookies::token_from_headers(&headers),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_token_from_headers_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(axum::http::header::COOKIE, "theme=dark".parse().unwrap());

        assert_eq!(cookies::token_from_headers(&headers), None);
        assert_eq!(cookies::token_from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_token_from_headers_cleared_cookie() {
        // A cleared cookie arrives as an empty value and counts as missing
        let mut headers = HeaderMap::new();
        headers.insert(axum::http::header::COOKIE, "token=".parse().unwrap());

        assert_eq!(cookies::token_from_headers(&headers), None);
    }

    #[test]
    fn test_registration_validator_valid_data() {
        let result = RegistrationValidator.validate(&valid_register_request());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_registration_validator_password_mismatch() {
        let mut request = valid_register_request();
        request.confirm_password = "p2".to_string();

        let result = RegistrationValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "confirmPassword"));
    }

    #[test]
    fn test_registration_validator_invalid_role() {
        let mut request = valid_register_request();
        request.role = "admin".to_string();

        let result = RegistrationValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "role"));
    }

    #[test]
    fn test_registration_validator_malformed_email() {
        let mut request = valid_register_request();
        request.personal_info.email = "not-an-email".to_string();

        let result = RegistrationValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "personalInfo.email"));
    }

    #[test]
    fn test_registration_validator_missing_fields() {
        let request = RegisterRequest {
            username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: String::new(),
            personal_info: PersonalInfo::default(),
        };

        let result = RegistrationValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "username"));
        assert!(result.errors.iter().any(|e| e.field == "password"));
        assert!(result.errors.iter().any(|e| e.field == "role"));
        assert!(result.errors.iter().any(|e| e.field == "personalInfo.email"));
    }
}
