//! Guest factory for creating test guest entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::guest::{GuestSide, GuestStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test guests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guest::GuestFactory;
///
/// let guest = GuestFactory::new(&db)
///     .invitation_id(invitation.id)
///     .status(GuestStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct GuestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    side: GuestSide,
    phone: Option<String>,
    email: Option<String>,
    status: GuestStatus,
    invitation_id: Option<Uuid>,
    operation_id: Option<String>,
}

impl<'a> GuestFactory<'a> {
    /// Creates a new GuestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Guest {id}"` where id is auto-incremented
    /// - side: `GuestSide::Bride`
    /// - status: `GuestStatus::Pending`
    /// - all optional fields: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Guest {}", id),
            side: GuestSide::Bride,
            phone: None,
            email: None,
            status: GuestStatus::Pending,
            invitation_id: None,
            operation_id: None,
        }
    }

    /// Sets the guest name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the wedding side.
    pub fn side(mut self, side: GuestSide) -> Self {
        self.side = side;
        self
    }

    /// Sets the phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the RSVP status.
    pub fn status(mut self, status: GuestStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches the guest to an invitation.
    pub fn invitation_id(mut self, invitation_id: Uuid) -> Self {
        self.invitation_id = Some(invitation_id);
        self
    }

    /// Sets the external correlation identifier.
    pub fn operation_id(mut self, operation_id: impl Into<String>) -> Self {
        self.operation_id = Some(operation_id.into());
        self
    }

    /// Builds and inserts the guest entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guest::Model)` - Created guest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guest::Model, DbErr> {
        entity::guest::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            side: ActiveValue::Set(self.side),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            status: ActiveValue::Set(self.status),
            invitation_id: ActiveValue::Set(self.invitation_id),
            operation_id: ActiveValue::Set(self.operation_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest with default values.
///
/// Shorthand for `GuestFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::guest::Model)` - Created guest entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::guest::Model, DbErr> {
    GuestFactory::new(db).build().await
}

/// Creates `count` guests attached to the given invitation.
///
/// # Arguments
/// - `db` - Database connection
/// - `invitation_id` - Invitation the guests belong to
/// - `count` - Number of guests to create
///
/// # Returns
/// - `Ok(Vec<entity::guest::Model>)` - Created guest entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guests_for_invitation(
    db: &DatabaseConnection,
    invitation_id: Uuid,
    count: usize,
) -> Result<Vec<entity::guest::Model>, DbErr> {
    let mut guests = Vec::with_capacity(count);
    for _ in 0..count {
        guests.push(GuestFactory::new(db).invitation_id(invitation_id).build().await?);
    }
    Ok(guests)
}
