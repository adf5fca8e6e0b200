//! Guest domain model and operation parameters.

use chrono::{DateTime, Utc};
use entity::guest::{GuestSide, GuestStatus};
use uuid::Uuid;

use crate::dto::{
    guest::{CreateGuestDto, GuestDto, SideDto, StatusDto, UpdateGuestDto},
    invitation::InvitationGuestDto,
};

impl From<SideDto> for GuestSide {
    fn from(side: SideDto) -> Self {
        match side {
            SideDto::Bride => GuestSide::Bride,
            SideDto::Groom => GuestSide::Groom,
        }
    }
}

impl From<GuestSide> for SideDto {
    fn from(side: GuestSide) -> Self {
        match side {
            GuestSide::Bride => SideDto::Bride,
            GuestSide::Groom => SideDto::Groom,
        }
    }
}

impl From<StatusDto> for GuestStatus {
    fn from(status: StatusDto) -> Self {
        match status {
            StatusDto::Pending => GuestStatus::Pending,
            StatusDto::Confirmed => GuestStatus::Confirmed,
            StatusDto::Declined => GuestStatus::Declined,
        }
    }
}

impl From<GuestStatus> for StatusDto {
    fn from(status: GuestStatus) -> Self {
        match status {
            GuestStatus::Pending => StatusDto::Pending,
            GuestStatus::Confirmed => StatusDto::Confirmed,
            GuestStatus::Declined => StatusDto::Declined,
        }
    }
}

/// Guest domain model.
#[derive(Debug, Clone)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    pub side: GuestSide,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: GuestStatus,
    pub invitation_id: Option<Uuid>,
    pub operation_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    /// Converts the entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guest::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            side: entity.side,
            phone: entity.phone,
            email: entity.email,
            status: entity.status,
            invitation_id: entity.invitation_id,
            operation_id: entity.operation_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to its API DTO.
    pub fn into_dto(self) -> GuestDto {
        GuestDto {
            id: self.id,
            name: self.name,
            side: self.side.into(),
            phone: self.phone,
            email: self.email,
            status: self.status.into(),
            invitation_id: self.invitation_id,
            operation_id: self.operation_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a guest. A missing RSVP status resolves to
/// `Pending` here so the repositories never deal with defaults.
#[derive(Debug, Clone)]
pub struct CreateGuestParams {
    pub name: String,
    pub side: GuestSide,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: GuestStatus,
    pub invitation_id: Option<Uuid>,
    pub operation_id: Option<String>,
}

impl CreateGuestParams {
    pub fn from_dto(dto: CreateGuestDto) -> Self {
        Self {
            name: dto.name,
            side: dto.side.into(),
            phone: dto.phone,
            email: dto.email,
            status: dto.status.map(Into::into).unwrap_or(GuestStatus::Pending),
            invitation_id: dto.invitation_id,
            operation_id: dto.operation_id,
        }
    }

    /// Builds params from a guest entry of the with-guests endpoint; the
    /// invitation id is filled in by the transaction that owns the batch.
    pub fn from_nested_dto(dto: InvitationGuestDto) -> Self {
        Self {
            name: dto.name,
            side: dto.side.into(),
            phone: dto.phone,
            email: dto.email,
            status: dto.status.map(Into::into).unwrap_or(GuestStatus::Pending),
            invitation_id: None,
            operation_id: dto.operation_id,
        }
    }
}

/// Parameters for partially updating a guest. `None` keeps the current
/// value; `invitation_id` distinguishes "leave" (`None`) from "detach"
/// (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct UpdateGuestParams {
    pub name: Option<String>,
    pub side: Option<GuestSide>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: Option<GuestStatus>,
    pub invitation_id: Option<Option<Uuid>>,
    pub operation_id: Option<String>,
}

impl UpdateGuestParams {
    pub fn from_dto(dto: UpdateGuestDto) -> Self {
        Self {
            name: dto.name,
            side: dto.side.map(Into::into),
            phone: dto.phone,
            email: dto.email,
            status: dto.status.map(Into::into),
            invitation_id: dto.invitation_id,
            operation_id: dto.operation_id,
        }
    }
}
