//! Invitation factory for creating test invitation entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test invitations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::invitation::InvitationFactory;
///
/// let invitation = InvitationFactory::new(&db)
///     .table_id(table.id)
///     .event_date(NaiveDate::from_ymd_opt(2026, 9, 12).unwrap())
///     .build()
///     .await?;
/// ```
pub struct InvitationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    message: Option<String>,
    event_date: Option<NaiveDate>,
    location: Option<String>,
    operation_id: Option<String>,
    table_id: Option<Uuid>,
}

impl<'a> InvitationFactory<'a> {
    /// Creates a new InvitationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Invitation {id}"` where id is auto-incremented
    /// - all optional fields: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `InvitationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Invitation {}", id),
            message: None,
            event_date: None,
            location: None,
            operation_id: None,
            table_id: None,
        }
    }

    /// Sets the invitation name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the greeting message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the event date.
    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.event_date = Some(event_date);
        self
    }

    /// Sets the venue location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the external correlation identifier.
    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Assigns the invitation to a seating table.
    pub fn table_id(mut self, table_id: Uuid) -> Self {
        self.table_id = Some(table_id);
        self
    }

    /// Builds and inserts the invitation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::invitation::Model)` - Created invitation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::invitation::Model, DbErr> {
        entity::invitation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            message: ActiveValue::Set(self.message),
            event_date: ActiveValue::Set(self.event_date),
            location: ActiveValue::Set(self.location),
            qr_code: ActiveValue::Set(None),
            operation_id: ActiveValue::Set(self.operation_id),
            table_id: ActiveValue::Set(self.table_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an invitation with default values.
///
/// Shorthand for `InvitationFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::invitation::Model)` - Created invitation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_invitation(
    db: &DatabaseConnection,
) -> Result<entity::invitation::Model, DbErr> {
    InvitationFactory::new(db).build().await
}
