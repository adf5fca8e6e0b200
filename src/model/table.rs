//! Seating table domain model and operation parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::{
    stats::TableStatsItemDto,
    table::{CreateTableDto, TableDto, UpdateTableDto},
};

/// Seating table domain model without derived occupancy.
#[derive(Debug, Clone)]
pub struct Table {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Table {
    /// Converts the entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::table::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            capacity: entity.capacity,
            location: entity.location,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }
}

/// Seating table with its derived occupancy numbers. This is what every
/// read endpoint exposes; the bare `Table` only exists between repository
/// lookups and rule checks.
#[derive(Debug, Clone)]
pub struct TableWithStats {
    pub table: Table,
    /// Guests seated here through invitations assigned to this table.
    pub guest_count: u64,
    /// Invitations currently assigned to this table.
    pub invitation_count: u64,
}

impl TableWithStats {
    /// Remaining seats. Negative values cannot occur through the API since
    /// capacity changes below occupancy are rejected.
    pub fn available(&self) -> i64 {
        self.table.capacity as i64 - self.guest_count as i64
    }

    /// Converts the domain model to its API DTO.
    pub fn into_dto(self) -> TableDto {
        let available = self.available();
        TableDto {
            id: self.table.id,
            name: self.table.name,
            capacity: self.table.capacity,
            location: self.table.location,
            notes: self.table.notes,
            created_at: self.table.created_at,
            guest_count: self.guest_count,
            available,
        }
    }

    /// Converts the domain model to the per-table stats DTO.
    pub fn into_stats_dto(self) -> TableStatsItemDto {
        let available = self.available();
        TableStatsItemDto {
            id: self.table.id,
            name: self.table.name,
            capacity: self.table.capacity,
            location: self.table.location,
            guest_count: self.guest_count,
            available,
            invitation_count: self.invitation_count,
        }
    }
}

/// Parameters for creating a seating table.
#[derive(Debug, Clone)]
pub struct CreateTableParams {
    pub name: String,
    pub capacity: i32,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl CreateTableParams {
    pub fn from_dto(dto: CreateTableDto) -> Self {
        Self {
            name: dto.name,
            capacity: dto.capacity,
            location: dto.location,
            notes: dto.notes,
        }
    }
}

/// Parameters for partially updating a seating table. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTableParams {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl UpdateTableParams {
    pub fn from_dto(dto: UpdateTableDto) -> Self {
        Self {
            name: dto.name,
            capacity: dto.capacity,
            location: dto.location,
            notes: dto.notes,
        }
    }
}
