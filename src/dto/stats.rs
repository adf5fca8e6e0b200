use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Aggregate dashboard numbers across guests and invitations.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_guests: u64,
    pub confirmed: u64,
    pub pending: u64,
    pub declined: u64,
    pub total_invitations: u64,
    /// Days until the nearest future event date, 0 when none exists.
    pub days_until_wedding: i64,
}

/// Per-table occupancy summary.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableStatsItemDto {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
    pub guest_count: u64,
    pub available: i64,
    pub invitation_count: u64,
}

/// Occupancy summary across all seating tables.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableStatsDto {
    pub tables: Vec<TableStatsItemDto>,
    pub total_tables: u64,
    pub total_capacity: i64,
    pub total_occupied: u64,
    pub total_available: i64,
}
