//! JWT token service.
//!
//! Handles token generation and validation for the bearer-token auth scheme.
//! Tokens are HS256-signed with the configured secret and expire after seven
//! days.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, model::user::User};

/// Token lifetime.
const TOKEN_TTL_DAYS: i64 = 7;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    /// Email at issue time.
    pub email: String,
    /// Role name at issue time.
    pub role: String,
    /// Issued-at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

/// Issues and validates the API's bearer tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Creates a token service from the configured signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token for the given user, valid for seven days.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: match user.role {
                entity::user::UserRole::User => "user".to_string(),
                entity::user::UserRole::Admin => "admin".to_string(),
            },
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        self.sign(&claims)
    }

    /// Validates a token and returns its claims.
    ///
    /// Every failure mode (expired, tampered, malformed) maps to 401 so the
    /// response does not reveal why the token was rejected.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token expired".to_string())
                }
                _ => AppError::Unauthorized("Invalid token".to_string()),
            }
        })?;

        Ok(data.claims)
    }

    /// Extracts the token from an `Authorization: Bearer <token>` header.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }

    pub(crate) fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use entity::user::UserRole;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "bride@example.com".to_string(),
            password_hash: "unused".to_string(),
            name: Some("Bride".to_string()),
            role: UserRole::Admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issues_and_validates_token() {
        let service = JwtService::new("test-secret");
        let user = sample_user();

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "bride@example.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_expired_token() {
        let service = JwtService::new("test-secret");
        let now = Utc::now().timestamp();
        // Well past the default validation leeway.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "late@example.com".to_string(),
            role: "user".to_string(),
            iat: now - 14_400,
            exp: now - 7200,
        };

        let token = service.sign(&claims).unwrap();
        let err = service.verify(&token).unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(_)));
        assert_eq!(err.to_string(), "Token expired");
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = JwtService::new("secret-a");
        let verifier = JwtService::new("secret-b");

        let token = issuer.issue(&sample_user()).unwrap();
        let err = verifier.verify(&token).unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn extracts_bearer_token_from_header() {
        assert_eq!(
            JwtService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
