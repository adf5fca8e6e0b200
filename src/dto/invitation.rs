use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::dto::guest::{GuestDto, SideDto, StatusDto};

/// Invitation creation request body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub message: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    pub operation_id: Option<String>,
    pub table_id: Option<Uuid>,
}

/// Invitation partial-update request body.
///
/// Omitted fields keep their current value. `tableId` is double-wrapped so
/// an explicit `null` unassigns the invitation from its table.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvitationDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub message: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    pub operation_id: Option<String>,
    #[serde(default, deserialize_with = "crate::util::serde::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub table_id: Option<Option<Uuid>>,
}

/// Guest entry inside a `POST /invitations/with-guests` request. The
/// invitation id is assigned by the server inside the transaction.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvitationGuestDto {
    #[validate(length(min = 1))]
    pub name: String,
    pub side: SideDto,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub status: Option<StatusDto>,
    pub operation_id: Option<String>,
}

/// Body of the atomic invitation-with-guests creation endpoint.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationWithGuestsDto {
    #[validate(nested)]
    pub invitation: CreateInvitationDto,
    #[validate(nested)]
    pub guests: Vec<InvitationGuestDto>,
}

/// Invitation as exposed by the API.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDto {
    pub id: Uuid,
    pub name: String,
    pub message: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    pub operation_id: Option<String>,
    pub table_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Invitation with its owned guests embedded, returned by the detail and
/// with-guests endpoints.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDetailDto {
    #[serde(flatten)]
    pub invitation: InvitationDto,
    pub guests: Vec<GuestDto>,
}

/// Query string for the invitation list endpoint.
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct InvitationQueryDto {
    /// 1-based page number; pagination applies only when `limit` is also set.
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    /// Page size, capped at 100.
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u64>,
}
