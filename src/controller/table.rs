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
        table::{CreateTableDto, TableDto, TableQueryDto, UpdateTableDto},
    },
    error::AppError,
    model::table::{CreateTableParams, TableWithStats, UpdateTableParams},
    service::table::TableService,
    state::AppState,
};

/// Tag for grouping table endpoints in OpenAPI documentation
pub static TABLE_TAG: &str = "tables";

/// Create a new seating table.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Table creation data
///
/// # Returns
/// - `201 Created` - Successfully created table
/// - `400 Bad Request` - Invalid table data (capacity must be at least 1)
/// - `409 Conflict` - Duplicate table name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/tables",
    tag = TABLE_TAG,
    request_body = CreateTableDto,
    responses(
        (status = 201, description = "Successfully created table", body = TableDto),
        (status = 400, description = "Invalid table data", body = ErrorDto),
        (status = 409, description = "Duplicate table name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_table(
    State(state): State<AppState>,
    Json(payload): Json<CreateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = TableService::new(&state.db);

    let table = service.create(CreateTableParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(table.into_dto())))
}

/// Get all seating tables with occupancy stats.
///
/// Every item carries the computed `guestCount` and `available` seats. When
/// both `page` and `limit` are present the response is a pagination
/// envelope; otherwise it is a plain array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Pagination parameters
///
/// # Returns
/// - `200 OK` - Table list (plain or paginated)
/// - `400 Bad Request` - Out-of-range pagination parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/tables",
    tag = TABLE_TAG,
    params(TableQueryDto),
    responses(
        (status = 200, description = "Table list", body = ListResponse<TableDto>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tables(
    State(state): State<AppState>,
    Query(query): Query<TableQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&query)?;

    let service = TableService::new(&state.db);

    let tables = service.get_all(query.page, query.limit).await?;

    Ok((
        StatusCode::OK,
        Json(ListResponse::from(tables.map(TableWithStats::into_dto))),
    ))
}

/// Get a seating table by ID, with occupancy stats.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Table id
///
/// # Returns
/// - `200 OK` - Table details
/// - `404 Not Found` - No table with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/tables/{id}",
    tag = TABLE_TAG,
    params(("id" = Uuid, Path, description = "Table id")),
    responses(
        (status = 200, description = "Table details", body = TableDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = TableService::new(&state.db);

    let table = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(table.into_dto())))
}

/// Update a seating table.
///
/// Renaming onto an existing table name is rejected, as is reducing the
/// capacity below the current guest count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Table id
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Updated table
/// - `400 Bad Request` - Invalid table data
/// - `404 Not Found` - No table with that id
/// - `409 Conflict` - Name collision or capacity below occupancy
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/tables/{id}",
    tag = TABLE_TAG,
    params(("id" = Uuid, Path, description = "Table id")),
    request_body = UpdateTableDto,
    responses(
        (status = 200, description = "Successfully updated table", body = TableDto),
        (status = 400, description = "Invalid table data", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 409, description = "Name collision or capacity below occupancy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_table(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_dto(&payload)?;

    let service = TableService::new(&state.db);

    let table = service.update(id, UpdateTableParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(table.into_dto())))
}

/// Delete a seating table.
///
/// Rejected while any invitation is still assigned to the table.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Table id
///
/// # Returns
/// - `204 No Content` - Successfully deleted table
/// - `404 Not Found` - No table with that id
/// - `409 Conflict` - Table still has assigned invitations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/tables/{id}",
    tag = TABLE_TAG,
    params(("id" = Uuid, Path, description = "Table id")),
    responses(
        (status = 204, description = "Successfully deleted table"),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 409, description = "Table still has assigned invitations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_table(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = TableService::new(&state.db);

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
