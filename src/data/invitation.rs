//! Invitation data repository for database operations.
//!
//! This module provides the `InvitationRepository` for managing invitations:
//! creation (including the transactional invitation-plus-guests batch),
//! paginated listing, lookups by the unique columns, partial updates,
//! deletion, and the event-date query behind the dashboard countdown.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use crate::model::{
    guest::{CreateGuestParams, Guest},
    invitation::{CreateInvitationParams, Invitation, InvitationWithGuests, UpdateInvitationParams},
};

/// Repository providing database operations for invitations.
pub struct InvitationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationRepository<'a> {
    /// Creates a new InvitationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InvitationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new invitation.
    ///
    /// # Arguments
    /// - `param` - Invitation fields
    ///
    /// # Returns
    /// - `Ok(Invitation)` - The created invitation
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateInvitationParams) -> Result<Invitation, DbErr> {
        let entity = Self::active_model(param).insert(self.db).await?;

        Ok(Invitation::from_entity(entity))
    }

    /// Inserts an invitation and its guests in a single transaction.
    ///
    /// Either the invitation and every guest are persisted, or the
    /// transaction rolls back and no rows remain. A guest that trips one of
    /// the unique indexes mid-batch therefore aborts the whole operation.
    ///
    /// # Arguments
    /// - `param` - Invitation fields
    /// - `guests` - Guests to attach; their `invitation_id` is assigned here
    ///
    /// # Returns
    /// - `Ok(InvitationWithGuests)` - The created invitation with all guests
    /// - `Err(DbErr)` - Any insert failed; nothing was persisted
    pub async fn create_with_guests(
        &self,
        param: CreateInvitationParams,
        guests: Vec<CreateGuestParams>,
    ) -> Result<InvitationWithGuests, DbErr> {
        let txn = self.db.begin().await?;

        let invitation = Self::active_model(param).insert(&txn).await?;

        let mut created = Vec::with_capacity(guests.len());
        for guest in guests {
            let entity = entity::guest::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(guest.name),
                side: ActiveValue::Set(guest.side),
                phone: ActiveValue::Set(guest.phone),
                email: ActiveValue::Set(guest.email),
                status: ActiveValue::Set(guest.status),
                invitation_id: ActiveValue::Set(Some(invitation.id)),
                operation_id: ActiveValue::Set(guest.operation_id),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(&txn)
            .await?;

            created.push(Guest::from_entity(entity));
        }

        txn.commit().await?;

        Ok(InvitationWithGuests {
            invitation: Invitation::from_entity(invitation),
            guests: created,
        })
    }

    /// Lists invitations, newest first.
    ///
    /// # Arguments
    /// - `slice` - Optional `(offset, limit)` window; `None` returns all rows
    ///
    /// # Returns
    /// - `Ok(Vec<Invitation>)` - Matching invitations
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self, slice: Option<(u64, u64)>) -> Result<Vec<Invitation>, DbErr> {
        let mut query = entity::prelude::Invitation::find()
            .order_by_desc(entity::invitation::Column::CreatedAt);

        if let Some((offset, limit)) = slice {
            query = query.offset(offset).limit(limit);
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Invitation::from_entity).collect())
    }

    /// Counts all invitations.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Invitation::find().count(self.db).await
    }

    /// Finds an invitation by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Invitation::from_entity))
    }

    /// Finds an invitation by id together with its owned guests.
    ///
    /// # Arguments
    /// - `id` - Invitation to load
    ///
    /// # Returns
    /// - `Ok(Some(InvitationWithGuests))` - Invitation with guests loaded
    /// - `Ok(None)` - No invitation with that id
    /// - `Err(DbErr)` - Database error during either query
    pub async fn find_by_id_with_guests(
        &self,
        id: Uuid,
    ) -> Result<Option<InvitationWithGuests>, DbErr> {
        let Some(entity) = entity::prelude::Invitation::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let guests = entity
            .find_related(entity::prelude::Guest)
            .order_by_desc(entity::guest::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(Some(InvitationWithGuests {
            invitation: Invitation::from_entity(entity),
            guests: guests.into_iter().map(Guest::from_entity).collect(),
        }))
    }

    /// Finds an invitation by its unique name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Invitation::from_entity))
    }

    /// Finds an invitation by its unique external correlation identifier.
    pub async fn find_by_operation_id(
        &self,
        operation_id: &str,
    ) -> Result<Option<Invitation>, DbErr> {
        let entity = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::OperationId.eq(operation_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Invitation::from_entity))
    }

    /// Applies a partial update to an invitation.
    ///
    /// Only fields present in the parameters are written. The double-wrapped
    /// `table_id` writes an explicit NULL when the caller unassigns the
    /// invitation from its table.
    ///
    /// # Arguments
    /// - `id` - Invitation to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Invitation))` - The updated invitation
    /// - `Ok(None)` - No invitation with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        param: UpdateInvitationParams,
    ) -> Result<Option<Invitation>, DbErr> {
        let Some(model) = entity::prelude::Invitation::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::invitation::ActiveModel = model.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(message) = param.message {
            active.message = ActiveValue::Set(Some(message));
        }
        if let Some(event_date) = param.event_date {
            active.event_date = ActiveValue::Set(Some(event_date));
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(Some(location));
        }
        if let Some(qr_code) = param.qr_code {
            active.qr_code = ActiveValue::Set(Some(qr_code));
        }
        if let Some(operation_id) = param.operation_id {
            active.operation_id = ActiveValue::Set(Some(operation_id));
        }
        if let Some(table_id) = param.table_id {
            active.table_id = ActiveValue::Set(table_id);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Invitation::from_entity(entity)))
    }

    /// Deletes an invitation by id. Guests keep their rows; the foreign key
    /// sets their `invitation_id` to NULL.
    ///
    /// # Arguments
    /// - `id` - Invitation to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Invitation deleted
    /// - `Ok(false)` - No invitation with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Invitation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns the nearest event date that is today or later.
    ///
    /// # Arguments
    /// - `today` - Lower bound for the search
    ///
    /// # Returns
    /// - `Ok(Some(date))` - Nearest upcoming event date
    /// - `Ok(None)` - No invitation has a future event date
    /// - `Err(DbErr)` - Database error during query
    pub async fn nearest_future_event_date(
        &self,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, DbErr> {
        let entity = entity::prelude::Invitation::find()
            .filter(entity::invitation::Column::EventDate.gte(today))
            .order_by_asc(entity::invitation::Column::EventDate)
            .one(self.db)
            .await?;

        Ok(entity.and_then(|m| m.event_date))
    }
}

impl InvitationRepository<'_> {
    fn active_model(param: CreateInvitationParams) -> entity::invitation::ActiveModel {
        entity::invitation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            message: ActiveValue::Set(param.message),
            event_date: ActiveValue::Set(param.event_date),
            location: ActiveValue::Set(param.location),
            qr_code: ActiveValue::Set(param.qr_code),
            operation_id: ActiveValue::Set(param.operation_id),
            table_id: ActiveValue::Set(param.table_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
    }
}
