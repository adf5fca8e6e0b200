//! Seating table data repository for database operations.
//!
//! This module provides the `TableRepository` for managing seating tables:
//! CRUD plus the occupancy queries (guest count and invitation count per
//! table) that back the capacity rules and the stats endpoints.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::model::table::{CreateTableParams, Table, TableWithStats, UpdateTableParams};

/// Repository providing database operations for seating tables.
pub struct TableRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableRepository<'a> {
    /// Creates a new TableRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TableRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new seating table.
    ///
    /// # Arguments
    /// - `param` - Table fields
    ///
    /// # Returns
    /// - `Ok(Table)` - The created table
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTableParams) -> Result<Table, DbErr> {
        let entity = entity::table::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            capacity: ActiveValue::Set(param.capacity),
            location: ActiveValue::Set(param.location),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Table::from_entity(entity))
    }

    /// Lists tables with derived occupancy, newest first.
    ///
    /// # Arguments
    /// - `slice` - Optional `(offset, limit)` window; `None` returns all rows
    ///
    /// # Returns
    /// - `Ok(Vec<TableWithStats>)` - Tables with guest and invitation counts
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn find_all_with_stats(
        &self,
        slice: Option<(u64, u64)>,
    ) -> Result<Vec<TableWithStats>, DbErr> {
        let mut query = entity::prelude::Table::find()
            .order_by_desc(entity::table::Column::CreatedAt);

        if let Some((offset, limit)) = slice {
            query = query.offset(offset).limit(limit);
        }

        let entities = query.all(self.db).await?;

        let mut tables = Vec::with_capacity(entities.len());
        for entity in entities {
            tables.push(self.with_stats(Table::from_entity(entity)).await?);
        }

        Ok(tables)
    }

    /// Counts all tables.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Table::find().count(self.db).await
    }

    /// Finds a table by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Table>, DbErr> {
        let entity = entity::prelude::Table::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Table::from_entity))
    }

    /// Finds a table by id together with its derived occupancy.
    pub async fn find_by_id_with_stats(&self, id: Uuid) -> Result<Option<TableWithStats>, DbErr> {
        match self.find_by_id(id).await? {
            Some(table) => Ok(Some(self.with_stats(table).await?)),
            None => Ok(None),
        }
    }

    /// Finds a table by its unique name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Table>, DbErr> {
        let entity = entity::prelude::Table::find()
            .filter(entity::table::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Table::from_entity))
    }

    /// Applies a partial update to a table.
    ///
    /// # Arguments
    /// - `id` - Table to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Table))` - The updated table
    /// - `Ok(None)` - No table with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateTableParams,
    ) -> Result<Option<Table>, DbErr> {
        let Some(model) = entity::prelude::Table::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::table::ActiveModel = model.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(capacity) = param.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(notes) = param.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Table::from_entity(entity)))
    }

    /// Deletes a table by id.
    ///
    /// # Arguments
    /// - `id` - Table to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Table deleted
    /// - `Ok(false)` - No table with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Table::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns true when any invitation is assigned to the table.
    pub async fn has_invitations(&self, id: Uuid) -> Result<bool, DbErr> {
        Ok(self.invitation_count(id).await? > 0)
    }

    /// Counts invitations assigned to the table.
    pub async fn invitation_count(&self, id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::TableId.eq(id))
            .count(self.db)
            .await
    }

    /// Counts guests seated at the table through its assigned invitations.
    ///
    /// # Arguments
    /// - `id` - Table to count seats for
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of guests across all invitations at this table
    /// - `Err(DbErr)` - Database error during the join query
    pub async fn guest_count(&self, id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Guest::find()
            .inner_join(entity::prelude::Invitation)
            .filter(entity::invitation::Column::TableId.eq(id))
            .count(self.db)
            .await
    }

    async fn with_stats(&self, table: Table) -> Result<TableWithStats, DbErr> {
        let guest_count = self.guest_count(table.id).await?;
        let invitation_count = self.invitation_count(table.id).await?;

        Ok(TableWithStats {
            table,
            guest_count,
            invitation_count,
        })
    }
}
