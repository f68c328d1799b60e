//! Session token issuing and verification
//!
//! Symmetric HS256 signing over a claims payload carrying the user id and
//! role. Keys are built once at startup from the configured secret and
//! injected here, so business logic never reads the environment.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::models::Claims;

/// Token lifetime: seven days, fixed. Matches the session cookie Max-Age.
pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens with a fixed symmetric key
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed session token for the given user, expiring in seven
    /// days
    pub fn issue(&self, user_id: &str, role: &str) -> Result<String, TokenError> {
        let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            exp,
        };
        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verify a session token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims)
    }
}
