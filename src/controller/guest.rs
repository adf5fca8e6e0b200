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
        guest::{CreateGuestDto, GuestDto, GuestQueryDto, UpdateGuestDto},
    },
    error::AppError,
    model::guest::{CreateGuestParams, Guest, UpdateGuestParams},
    service::guest::GuestService,
    state::AppState,
};

/// Tag for grouping guest endpoints in OpenAPI documentation
pub static GUEST_TAG: &str = "guests";

/// Create a new guest.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Guest creation data
///
/// # Returns
/// - `201 Created` - Successfully created guest
/// - `400 Bad Request` - Invalid guest data
/// - `409 Conflict` - Duplicate name or operationId
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/guests",
    tag = GUEST_TAG,
    request_body = CreateGuestDto,
    responses(
        (status = 201, description = "Successfully created guest", body = GuestDto),
        (status = 400, description = "Invalid guest data", body = ErrorDto),
        (status = 409, description = "Duplicate name or operationId", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_guest(
    State(state): State<AppState>,
    Json(payload): Json<CreateGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = GuestService::new(&state.db);

    let guest = service.create(CreateGuestParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(guest.into_dto())))
}

/// Get all guests.
///
/// Optionally filters by invitation and paginates. When both `page` and
/// `limit` are present the response is a pagination envelope; otherwise it
/// is a plain array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Filter and pagination parameters
///
/// # Returns
/// - `200 OK` - Guest list (plain or paginated)
/// - `400 Bad Request` - Out-of-range pagination parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/guests",
    tag = GUEST_TAG,
    params(GuestQueryDto),
    responses(
        (status = 200, description = "Guest list", body = ListResponse<GuestDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guests(
    State(state): State<AppState>,
    Query(query): Query<GuestQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&query)?;

    let service = GuestService::new(&state.db);

    let guests = service
        .get_all(query.invitation_id, query.page, query.limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ListResponse::from(guests.map(Guest::into_dto))),
    ))
}

/// Get a guest by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Guest id
///
/// # Returns
/// - `200 OK` - Guest details
/// - `404 Not Found` - No guest with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/guests/{id}",
    tag = GUEST_TAG,
    params(("id" = Uuid, Path, description = "Guest id")),
    responses(
        (status = 200, description = "Guest details", body = GuestDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guest_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    let guest = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

/// Update a guest.
///
/// Omitted fields keep their current value; `invitationId: null` detaches
/// the guest from its invitation.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Guest id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Updated guest
/// - `400 Bad Request` - Invalid guest data
/// - `404 Not Found` - No guest with that id
/// - `409 Conflict` - Rename onto an existing unique value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/guests/{id}",
    tag = GUEST_TAG,
    params(("id" = Uuid, Path, description = "Guest id")),
    request_body = UpdateGuestDto,
    responses(
        (status = 200, description = "Successfully updated guest", body = GuestDto),
        (status = 400, description = "Invalid guest data", body = ErrorDto),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 409, description = "Duplicate unique value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = GuestService::new(&state.db);

    let guest = service
        .update(id, UpdateGuestParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(guest.into_dto())))
}

/// Delete a guest.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Guest id
///
/// # Returns
/// - `204 No Content` - Successfully deleted guest
/// - `404 Not Found` - No guest with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/guests/{id}",
    tag = GUEST_TAG,
    params(("id" = Uuid, Path, description = "Guest id")),
    responses(
        (status = 204, description = "Successfully deleted guest"),
        (status = 404, description = "Guest not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuestService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
