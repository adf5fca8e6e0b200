//! Table factory for creating test seating table entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test seating tables with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::table::TableFactory;
///
/// let table = TableFactory::new(&db).capacity(4).build().await?;
/// ```
pub struct TableFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    capacity: i32,
    location: Option<String>,
    notes: Option<String>,
}

impl<'a> TableFactory<'a> {
    /// Creates a new TableFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Table {id}"` where id is auto-incremented
    /// - capacity: `8`
    /// - location/notes: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TableFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Table {}", id),
            capacity: 8,
            location: None,
            notes: None,
        }
    }

    /// Sets the table name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seat capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the location description.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets free-form notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds and inserts the table entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::table::Model)` - Created table entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::table::Model, DbErr> {
        entity::table::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            capacity: ActiveValue::Set(self.capacity),
            location: ActiveValue::Set(self.location),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a seating table with default values.
///
/// Shorthand for `TableFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::table::Model)` - Created table entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_table(db: &DatabaseConnection) -> Result<entity::table::Model, DbErr> {
    TableFactory::new(db).build().await
}
