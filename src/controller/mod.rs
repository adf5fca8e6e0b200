//! HTTP request handlers.
//!
//! Controllers adapt the HTTP layer to the services: they validate request
//! DTOs, convert them to operation parameters, invoke the service, and
//! serialize the domain result back into response DTOs with the right
//! status code. Each handler carries a `#[utoipa::path]` annotation feeding
//! the generated OpenAPI document.

pub mod auth;
pub mod guest;
pub mod invitation;
pub mod stats;
pub mod table;

use validator::Validate;

use crate::error::AppError;

/// Runs the declarative `validator` rules of a request DTO, mapping
/// violations to a 400 response.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))
}
