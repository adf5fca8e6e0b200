//! Aggregate statistics domain models.

use crate::{
    dto::stats::{DashboardStatsDto, TableStatsDto},
    model::table::TableWithStats,
};

/// Guest totals grouped by RSVP status.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestStatusCounts {
    pub total: u64,
    pub confirmed: u64,
    pub pending: u64,
    pub declined: u64,
}

/// Numbers backing the dashboard view.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub guests: GuestStatusCounts,
    pub total_invitations: u64,
    /// Days until the nearest future event date, 0 when none exists.
    pub days_until_wedding: i64,
}

impl DashboardStats {
    /// Converts the domain model to its API DTO.
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            total_guests: self.guests.total,
            confirmed: self.guests.confirmed,
            pending: self.guests.pending,
            declined: self.guests.declined,
            total_invitations: self.total_invitations,
            days_until_wedding: self.days_until_wedding,
        }
    }
}

/// Occupancy summary across all seating tables.
#[derive(Debug, Clone)]
pub struct TableStats {
    pub tables: Vec<TableWithStats>,
}

impl TableStats {
    /// Converts the domain model to its API DTO, computing the aggregate
    /// totals from the per-table numbers.
    pub fn into_dto(self) -> TableStatsDto {
        let total_tables = self.tables.len() as u64;
        let total_capacity: i64 = self.tables.iter().map(|t| t.table.capacity as i64).sum();
        let total_occupied: u64 = self.tables.iter().map(|t| t.guest_count).sum();
        let total_available = total_capacity - total_occupied as i64;

        TableStatsDto {
            tables: self
                .tables
                .into_iter()
                .map(TableWithStats::into_stats_dto)
                .collect(),
            total_tables,
            total_capacity,
            total_occupied,
            total_available,
        }
    }
}
