use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Wedding side of a guest on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SideDto {
    Bride,
    Groom,
}

/// RSVP status on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusDto {
    Pending,
    Confirmed,
    Declined,
}

/// Guest creation request body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub side: SideDto,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub status: Option<StatusDto>,
    pub invitation_id: Option<Uuid>,
    pub operation_id: Option<String>,
}

/// Guest partial-update request body.
///
/// Omitted fields keep their current value. `invitationId` is double-wrapped
/// so an explicit `null` detaches the guest from its invitation.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub side: Option<SideDto>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub status: Option<StatusDto>,
    #[serde(default, deserialize_with = "crate::util::serde::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub invitation_id: Option<Option<Uuid>>,
    pub operation_id: Option<String>,
}

/// Guest as exposed by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    pub id: Uuid,
    pub name: String,
    pub side: SideDto,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: StatusDto,
    pub invitation_id: Option<Uuid>,
    pub operation_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Query string for the guest list endpoint.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GuestQueryDto {
    /// Restrict the list to guests of one invitation.
    pub invitation_id: Option<Uuid>,
    /// 1-based page number; pagination applies only when `limit` is also set.
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    /// Page size, capped at 100.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}
