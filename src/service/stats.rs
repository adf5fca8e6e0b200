//! Aggregate statistics service for the dashboard and table views.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{guest::GuestRepository, invitation::InvitationRepository, table::TableRepository},
    error::AppError,
    model::stats::{DashboardStats, TableStats},
};

/// Service computing the aggregate numbers exposed under `/stats`.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    /// Creates a new StatsService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the dashboard numbers: guest counts by status, total
    /// invitations, and the countdown to the nearest future event date
    /// (0 when none exists).
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        let guests = GuestRepository::new(self.db).count_by_status().await?;

        let invitation_repo = InvitationRepository::new(self.db);
        let total_invitations = invitation_repo.count().await?;

        let today = Utc::now().date_naive();
        let days_until_wedding = match invitation_repo.nearest_future_event_date(today).await? {
            Some(event_date) => (event_date - today).num_days(),
            None => 0,
        };

        Ok(DashboardStats {
            guests,
            total_invitations,
            days_until_wedding,
        })
    }

    /// Computes the per-table occupancy summary across all tables.
    pub async fn table_stats(&self) -> Result<TableStats, AppError> {
        let tables = TableRepository::new(self.db)
            .find_all_with_stats(None)
            .await?;

        Ok(TableStats { tables })
    }
}
