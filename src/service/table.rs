//! Seating table service: CRUD, occupancy stats, and the capacity rules.
//!
//! The capacity rules live here and are shared with the invitation service:
//! `validate_table_capacity` is called before any invitation is assigned to
//! a table, and updates/deletes of a table re-check occupancy and
//! references.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::table::TableRepository,
    error::AppError,
    model::table::{CreateTableParams, TableWithStats, UpdateTableParams},
    util::pagination::{slice_params, ListResult, Paginated},
};

/// Service providing business logic for seating table management.
pub struct TableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableService<'a> {
    /// Creates a new TableService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a table after checking the unique name.
    pub async fn create(&self, params: CreateTableParams) -> Result<TableWithStats, AppError> {
        let repo = TableRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(
                "Table with this name already exists".to_string(),
            ));
        }

        let table = repo.create(params).await?;

        // A table that did not exist a moment ago has no occupants.
        Ok(TableWithStats {
            table,
            guest_count: 0,
            invitation_count: 0,
        })
    }

    /// Lists tables with derived occupancy, optionally paginated.
    ///
    /// Pagination applies only when both `page` and `limit` are present;
    /// otherwise the full list is returned.
    pub async fn get_all(
        &self,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<ListResult<TableWithStats>, AppError> {
        let repo = TableRepository::new(self.db);
        let slice = slice_params(page, limit);

        let data = repo.find_all_with_stats(slice).await?;

        match slice {
            Some((_, limit)) => {
                let total = repo.count().await?;
                Ok(ListResult::Paginated(Paginated {
                    data,
                    total,
                    page: page.unwrap_or(1),
                    limit,
                }))
            }
            None => Ok(ListResult::Full(data)),
        }
    }

    /// Loads one table with derived occupancy.
    pub async fn get_by_id(&self, id: Uuid) -> Result<TableWithStats, AppError> {
        TableRepository::new(self.db)
            .find_by_id_with_stats(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))
    }

    /// Applies a partial update to a table.
    ///
    /// Renaming onto an existing table name is rejected, as is reducing the
    /// capacity below the table's current occupancy.
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateTableParams,
    ) -> Result<TableWithStats, AppError> {
        let repo = TableRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Table not found".to_string()));
        }

        if let Some(name) = &params.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != id {
                    return Err(AppError::Conflict(
                        "Table with this name already exists".to_string(),
                    ));
                }
            }
        }

        if let Some(capacity) = params.capacity {
            let guest_count = repo.guest_count(id).await?;
            if (capacity as u64) < guest_count {
                return Err(AppError::Conflict(format!(
                    "Cannot reduce capacity below current guest count ({guest_count} guests)"
                )));
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

        repo.find_by_id_with_stats(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))
    }

    /// Deletes a table unless an invitation still references it.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = TableRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Table not found".to_string()));
        }

        if repo.has_invitations(id).await? {
            return Err(AppError::Conflict(
                "Cannot delete table with assigned invitations".to_string(),
            ));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Checks that a table can seat `additional_guests` more guests.
    ///
    /// Exactly-at-capacity passes; one seat over is rejected.
    ///
    /// # Arguments
    /// - `table_id` - Table to check
    /// - `additional_guests` - Seats about to be taken on top of the current
    ///   occupancy
    ///
    /// # Returns
    /// - `Ok(())` - The guests fit
    /// - `Err(AppError::NotFound)` - No table with that id
    /// - `Err(AppError::Conflict)` - Capacity would be exceeded
    pub async fn validate_table_capacity(
        &self,
        table_id: Uuid,
        additional_guests: u64,
    ) -> Result<(), AppError> {
        let repo = TableRepository::new(self.db);

        let table = repo
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

        let current = repo.guest_count(table_id).await?;
        let total = current + additional_guests;

        if total > table.capacity as u64 {
            return Err(AppError::Conflict(format!(
                "Table capacity exceeded ({total}/{})",
                table.capacity
            )));
        }

        Ok(())
    }
}
