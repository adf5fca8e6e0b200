//! Bearer-token authentication extractor.
//!
//! Protected handlers take an [`AuthUser`] argument; extraction reads the
//! `Authorization: Bearer <token>` header and verifies the token against
//! the application's signing secret. Missing or invalid tokens reject the
//! request with 401 before the handler body runs.

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

use crate::{
    error::AppError,
    service::jwt::{Claims, JwtService},
    state::AppState,
};

/// The authenticated caller, as proven by a valid bearer token.
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the token subject parsed as a user id.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".to_string()))?;

        let claims = state.jwt.verify(token)?;

        Ok(AuthUser(claims))
    }
}
