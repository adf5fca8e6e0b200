use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::ErrorDto,
        stats::{DashboardStatsDto, TableStatsDto},
    },
    error::AppError,
    service::stats::StatsService,
    state::AppState,
};

/// Tag for grouping stats endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get dashboard statistics.
///
/// Returns guest totals by RSVP status, the invitation count, and the
/// number of days until the nearest future event date (0 when none exists).
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Dashboard statistics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/stats/dashboard",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StatsService::new(&state.db);

    let stats = service.dashboard().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Get per-table occupancy statistics.
///
/// Returns every table with its guest count, free seats, and invitation
/// count, plus aggregate totals across all tables.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Table statistics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/stats/tables",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Table statistics", body = TableStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StatsService::new(&state.db);

    let stats = service.table_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
