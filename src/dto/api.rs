use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of the uniform error envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

/// Uniform error envelope returned by every failing endpoint:
/// `{"error":{"statusCode":<n>,"message":<s>}}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: ErrorBody,
}

impl ErrorDto {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                status_code,
                message: message.into(),
            },
        }
    }
}

/// One page of a collection along with pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedDto<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// List endpoints return either the full collection (no pagination requested)
/// or one page with metadata, mirroring the query parameters.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Full(Vec<T>),
    Paginated(PaginatedDto<T>),
}

impl<T> From<crate::util::pagination::ListResult<T>> for ListResponse<T> {
    fn from(result: crate::util::pagination::ListResult<T>) -> Self {
        use crate::util::pagination::ListResult;

        match result {
            ListResult::Full(data) => Self::Full(data),
            ListResult::Paginated(page) => Self::Paginated(PaginatedDto {
                data: page.data,
                total: page.total,
                page: page.page,
                limit: page.limit,
            }),
        }
    }
}

/// Health probe response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
