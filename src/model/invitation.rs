//! Invitation domain model and operation parameters.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    dto::invitation::{
        CreateInvitationDto, InvitationDetailDto, InvitationDto, UpdateInvitationDto,
    },
    model::guest::Guest,
};

/// Invitation domain model.
#[derive(Debug, Clone)]
pub struct Invitation {
    pub id: Uuid,
    pub name: String,
    pub message: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    pub operation_id: Option<String>,
    pub table_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Converts the entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::invitation::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            message: entity.message,
            event_date: entity.event_date,
            location: entity.location,
            qr_code: entity.qr_code,
            operation_id: entity.operation_id,
            table_id: entity.table_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to its API DTO.
    pub fn into_dto(self) -> InvitationDto {
        InvitationDto {
            id: self.id,
            name: self.name,
            message: self.message,
            event_date: self.event_date,
            location: self.location,
            qr_code: self.qr_code,
            operation_id: self.operation_id,
            table_id: self.table_id,
            created_at: self.created_at,
        }
    }
}

/// Invitation together with its owned guests, used by the detail endpoint
/// and as the result of the atomic with-guests creation.
#[derive(Debug, Clone)]
pub struct InvitationWithGuests {
    pub invitation: Invitation,
    pub guests: Vec<Guest>,
}

impl InvitationWithGuests {
    /// Converts the domain model to its API DTO.
    pub fn into_dto(self) -> InvitationDetailDto {
        InvitationDetailDto {
            invitation: self.invitation.into_dto(),
            guests: self.guests.into_iter().map(Guest::into_dto).collect(),
        }
    }
}

/// Parameters for creating an invitation.
#[derive(Debug, Clone)]
pub struct CreateInvitationParams {
    pub name: String,
    pub message: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    pub operation_id: Option<String>,
    pub table_id: Option<Uuid>,
}

impl CreateInvitationParams {
    pub fn from_dto(dto: CreateInvitationDto) -> Self {
        Self {
            name: dto.name,
            message: dto.message,
            event_date: dto.event_date,
            location: dto.location,
            qr_code: dto.qr_code,
            operation_id: dto.operation_id,
            table_id: dto.table_id,
        }
    }
}

/// Parameters for partially updating an invitation. `None` keeps the current
/// value; `table_id` distinguishes "leave" (`None`) from "unassign"
/// (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct UpdateInvitationParams {
    pub name: Option<String>,
    pub message: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    pub operation_id: Option<String>,
    pub table_id: Option<Option<Uuid>>,
}

impl UpdateInvitationParams {
    pub fn from_dto(dto: UpdateInvitationDto) -> Self {
        Self {
            name: dto.name,
            message: dto.message,
            event_date: dto.event_date,
            location: dto.location,
            qr_code: dto.qr_code,
            operation_id: dto.operation_id,
            table_id: dto.table_id,
        }
    }
}
