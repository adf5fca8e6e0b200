//! Guest data repository for database operations.
//!
//! This module provides the `GuestRepository` for managing guest records in
//! the database: creation, filtered and paginated listing, lookups by the
//! unique columns, partial updates, deletion, and the status aggregation
//! behind the dashboard.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use crate::model::{
    guest::{CreateGuestParams, Guest, UpdateGuestParams},
    stats::GuestStatusCounts,
};

/// Repository providing database operations for guests.
pub struct GuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestRepository<'a> {
    /// Creates a new GuestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuestRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new guest.
    ///
    /// # Arguments
    /// - `param` - Guest fields; the RSVP status is already defaulted by the
    ///   parameter model
    ///
    /// # Returns
    /// - `Ok(Guest)` - The created guest
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGuestParams) -> Result<Guest, DbErr> {
        let entity = entity::guest::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            side: ActiveValue::Set(param.side),
            phone: ActiveValue::Set(param.phone),
            email: ActiveValue::Set(param.email),
            status: ActiveValue::Set(param.status),
            invitation_id: ActiveValue::Set(param.invitation_id),
            operation_id: ActiveValue::Set(param.operation_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Guest::from_entity(entity))
    }

    /// Lists guests, newest first.
    ///
    /// # Arguments
    /// - `invitation_id` - Restrict to guests of one invitation when present
    /// - `slice` - Optional `(offset, limit)` window; `None` returns all rows
    ///
    /// # Returns
    /// - `Ok(Vec<Guest>)` - Matching guests
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(
        &self,
        invitation_id: Option<Uuid>,
        slice: Option<(u64, u64)>,
    ) -> Result<Vec<Guest>, DbErr> {
        let mut query = Self::filtered(invitation_id)
            .order_by_desc(entity::guest::Column::CreatedAt);

        if let Some((offset, limit)) = slice {
            query = query.offset(offset).limit(limit);
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Guest::from_entity).collect())
    }

    /// Counts guests, optionally restricted to one invitation.
    ///
    /// # Arguments
    /// - `invitation_id` - Restrict to guests of one invitation when present
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching guests
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self, invitation_id: Option<Uuid>) -> Result<u64, DbErr> {
        Self::filtered(invitation_id).count(self.db).await
    }

    /// Finds a guest by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Guest>, DbErr> {
        let entity = entity::prelude::Guest::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Guest::from_entity))
    }

    /// Finds a guest by its unique name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Guest>, DbErr> {
        let entity = entity::prelude::Guest::find()
            .filter(entity::guest::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Guest::from_entity))
    }

    /// Finds a guest by its unique external correlation identifier.
    pub async fn find_by_operation_id(&self, operation_id: &str) -> Result<Option<Guest>, DbErr> {
        let entity = entity::prelude::Guest::find()
            .filter(entity::guest::Column::OperationId.eq(operation_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Guest::from_entity))
    }

    /// Applies a partial update to a guest.
    ///
    /// Only fields present in the parameters are written. The double-wrapped
    /// `invitation_id` writes an explicit NULL when the caller detaches the
    /// guest from its invitation.
    ///
    /// # Arguments
    /// - `id` - Guest to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Guest))` - The updated guest
    /// - `Ok(None)` - No guest with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateGuestParams,
    ) -> Result<Option<Guest>, DbErr> {
        let Some(model) = entity::prelude::Guest::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::guest::ActiveModel = model.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(side) = param.side {
            active.side = ActiveValue::Set(side);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(invitation_id) = param.invitation_id {
            active.invitation_id = ActiveValue::Set(invitation_id);
        }
        if let Some(operation_id) = param.operation_id {
            active.operation_id = ActiveValue::Set(Some(operation_id));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Guest::from_entity(entity)))
    }

    /// Deletes a guest by id.
    ///
    /// # Arguments
    /// - `id` - Guest to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Guest deleted
    /// - `Ok(false)` - No guest with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Guest::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts guests grouped by RSVP status.
    ///
    /// # Returns
    /// - `Ok(GuestStatusCounts)` - Totals per status plus the overall count
    /// - `Err(DbErr)` - Database error during one of the count queries
    pub async fn count_by_status(&self) -> Result<GuestStatusCounts, DbErr> {
        use entity::guest::GuestStatus;

        let total = entity::prelude::Guest::find().count(self.db).await?;
        let confirmed = self.count_with_status(GuestStatus::Confirmed).await?;
        let pending = self.count_with_status(GuestStatus::Pending).await?;
        let declined = self.count_with_status(GuestStatus::Declined).await?;

        Ok(GuestStatusCounts {
            total,
            confirmed,
            pending,
            declined,
        })
    }

    async fn count_with_status(
        &self,
        status: entity::guest::GuestStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Guest::find()
            .filter(entity::guest::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    fn filtered(invitation_id: Option<Uuid>) -> Select<entity::prelude::Guest> {
        let mut query = entity::prelude::Guest::find();
        if let Some(invitation_id) = invitation_id {
            query = query.filter(entity::guest::Column::InvitationId.eq(invitation_id));
        }
        query
    }
}
