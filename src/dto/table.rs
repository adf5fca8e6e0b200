use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Table creation request body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Table partial-update request body. Omitted fields keep their value.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Table as exposed by the API, always with derived occupancy numbers.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableDto {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Guests seated at this table through assigned invitations.
    pub guest_count: u64,
    /// Remaining seats: `capacity - guestCount`.
    pub available: i64,
}

/// Query string for the table list endpoint.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TableQueryDto {
    /// 1-based page number; pagination applies only when `limit` is also set.
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    /// Page size, capped at 100.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}
