use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    controller::validate_dto,
    dto::{
        api::{ErrorDto, ListResponse},
        invitation::{
            CreateInvitationDto, CreateInvitationWithGuestsDto, InvitationDetailDto,
            InvitationDto, InvitationQueryDto, UpdateInvitationDto,
        },
    },
    error::AppError,
    model::{
        guest::CreateGuestParams,
        invitation::{CreateInvitationParams, Invitation, UpdateInvitationParams},
    },
    service::invitation::InvitationService,
    state::AppState,
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitations";

/// Create a new invitation.
///
/// When a `tableId` is supplied the table must exist and have room for the
/// invitation's future guests (checked again as guests are added).
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Invitation creation data
///
/// # Returns
/// - `201 Created` - Successfully created invitation
/// - `400 Bad Request` - Invalid invitation data
/// - `404 Not Found` - Referenced table does not exist
/// - `409 Conflict` - Duplicate name/operationId or table at capacity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/invitations",
    tag = INVITATION_TAG,
    request_body = CreateInvitationDto,
    responses(
        (status = 201, description = "Successfully created invitation", body = InvitationDto),
        (status = 400, description = "Invalid invitation data", body = ErrorDto),
        (status = 404, description = "Referenced table not found", body = ErrorDto),
        (status = 409, description = "Duplicate unique value or capacity exceeded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invitation(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = InvitationService::new(&state.db);

    let invitation = service
        .create(CreateInvitationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(invitation.into_dto())))
}

/// Create an invitation together with its guests, atomically.
///
/// The invitation and all guests are inserted in one database transaction:
/// a failure anywhere in the batch leaves no rows behind.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Invitation plus the guests to attach
///
/// # Returns
/// - `201 Created` - Invitation and all guests created
/// - `400 Bad Request` - Invalid data
/// - `404 Not Found` - Referenced table does not exist
/// - `409 Conflict` - Duplicate unique value or table capacity exceeded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/invitations/with-guests",
    tag = INVITATION_TAG,
    request_body = CreateInvitationWithGuestsDto,
    responses(
        (status = 201, description = "Invitation and guests created", body = InvitationDetailDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 404, description = "Referenced table not found", body = ErrorDto),
        (status = 409, description = "Duplicate unique value or capacity exceeded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invitation_with_guests(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvitationWithGuestsDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = InvitationService::new(&state.db);

    let guests = payload
        .guests
        .into_iter()
        .map(CreateGuestParams::from_nested_dto)
        .collect();

    let result = service
        .create_with_guests(CreateInvitationParams::from_dto(payload.invitation), guests)
        .await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

/// Get all invitations.
///
/// When both `page` and `limit` are present the response is a pagination
/// envelope; otherwise it is a plain array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Pagination parameters
///
/// # Returns
/// - `200 OK` - Invitation list (plain or paginated)
/// - `400 Bad Request` - Out-of-range pagination parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/invitations",
    tag = INVITATION_TAG,
    params(InvitationQueryDto),
    responses(
        (status = 200, description = "Invitation list", body = ListResponse<InvitationDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invitations(
    State(state): State<AppState>,
    Query(query): Query<InvitationQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&query)?;

    let service = InvitationService::new(&state.db);

    let invitations = service.get_all(query.page, query.limit).await?;

    Ok((
        StatusCode::OK,
        Json(ListResponse::from(invitations.map(Invitation::into_dto))),
    ))
}

/// Get an invitation by ID, with its guests embedded.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Invitation id
///
/// # Returns
/// - `200 OK` - Invitation with guests
/// - `404 Not Found` - No invitation with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/invitations/{id}",
    tag = INVITATION_TAG,
    params(("id" = Uuid, Path, description = "Invitation id")),
    responses(
        (status = 200, description = "Invitation details", body = InvitationDetailDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invitation_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = InvitationService::new(&state.db);

    let invitation = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}

/// Update an invitation.
///
/// Omitted fields keep their current value; `tableId: null` unassigns the
/// invitation from its table. Moving to a different table re-validates that
/// table's capacity against the invitation's guest count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Invitation id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Updated invitation
/// - `400 Bad Request` - Invalid invitation data
/// - `404 Not Found` - Invitation or referenced table missing
/// - `409 Conflict` - Duplicate unique value or capacity exceeded
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/invitations/{id}",
    tag = INVITATION_TAG,
    params(("id" = Uuid, Path, description = "Invitation id")),
    request_body = UpdateInvitationDto,
    responses(
        (status = 200, description = "Successfully updated invitation", body = InvitationDto),
        (status = 400, description = "Invalid invitation data", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 409, description = "Duplicate unique value or capacity exceeded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_invitation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = InvitationService::new(&state.db);

    let invitation = service
        .update(id, UpdateInvitationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}

/// Delete an invitation.
///
/// Guests of the invitation survive with their `invitationId` cleared;
/// tables are unaffected.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Invitation id
///
/// # Returns
/// - `204 No Content` - Successfully deleted invitation
/// - `404 Not Found` - No invitation with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/invitations/{id}",
    tag = INVITATION_TAG,
    params(("id" = Uuid, Path, description = "Invitation id")),
    responses(
        (status = 204, description = "Successfully deleted invitation"),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_invitation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = InvitationService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
