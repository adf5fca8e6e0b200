//! Invitation service: CRUD, the atomic with-guests creation, and the
//! capacity checks on table assignment.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::{guest::GuestRepository, invitation::InvitationRepository},
    error::AppError,
    model::{
        guest::CreateGuestParams,
        invitation::{
            CreateInvitationParams, Invitation, InvitationWithGuests, UpdateInvitationParams,
        },
    },
    service::table::TableService,
    util::pagination::{slice_params, ListResult, Paginated},
};

/// Service providing business logic for invitation management.
pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationService<'a> {
    /// Creates a new InvitationService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an invitation after checking uniqueness and, when a table is
    /// requested, that the table has room.
    pub async fn create(&self, params: CreateInvitationParams) -> Result<Invitation, AppError> {
        self.check_unique(&params).await?;

        if let Some(table_id) = params.table_id {
            TableService::new(self.db)
                .validate_table_capacity(table_id, 0)
                .await?;
        }

        Ok(InvitationRepository::new(self.db).create(params).await?)
    }

    /// Creates an invitation and its guests atomically.
    ///
    /// Uniqueness of the invitation and table capacity (counting the new
    /// guests) are checked up front; the batch insert itself runs in one
    /// database transaction, so a mid-batch failure (for example a guest
    /// name tripping the unique index) leaves no rows behind.
    pub async fn create_with_guests(
        &self,
        params: CreateInvitationParams,
        guests: Vec<CreateGuestParams>,
    ) -> Result<InvitationWithGuests, AppError> {
        self.check_unique(&params).await?;

        if let Some(table_id) = params.table_id {
            TableService::new(self.db)
                .validate_table_capacity(table_id, guests.len() as u64)
                .await?;
        }

        Ok(InvitationRepository::new(self.db)
            .create_with_guests(params, guests)
            .await?)
    }

    /// Lists invitations, optionally paginated.
    ///
    /// Pagination applies only when both `page` and `limit` are present;
    /// otherwise the full list is returned.
    pub async fn get_all(
        &self,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<ListResult<Invitation>, AppError> {
        let repo = InvitationRepository::new(self.db);
        let slice = slice_params(page, limit);

        let data = repo.find_all(slice).await?;

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

    /// Loads one invitation with its guests.
    pub async fn get_by_id(&self, id: Uuid) -> Result<InvitationWithGuests, AppError> {
        InvitationRepository::new(self.db)
            .find_by_id_with_guests(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))
    }

    /// Applies a partial update to an invitation.
    ///
    /// Capacity is re-validated only when the update moves the invitation to
    /// a different table; the additional seats are the invitation's current
    /// guest count. Unassigning (explicit null) never needs a check.
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateInvitationParams,
    ) -> Result<Invitation, AppError> {
        let repo = InvitationRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;

        if let Some(Some(new_table_id)) = params.table_id {
            if existing.table_id != Some(new_table_id) {
                let guest_count = GuestRepository::new(self.db).count(Some(id)).await?;
                TableService::new(self.db)
                    .validate_table_capacity(new_table_id, guest_count)
                    .await?;
            }
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))
    }

    /// Deletes an invitation by id. Its guests survive with their
    /// `invitationId` cleared.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = InvitationRepository::new(self.db).delete(id).await?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound("Invitation not found".to_string()))
        }
    }

    async fn check_unique(&self, params: &CreateInvitationParams) -> Result<(), AppError> {
        let repo = InvitationRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(
                "Invitation with this name already exists".to_string(),
            ));
        }

        if let Some(operation_id) = &params.operation_id {
            if repo.find_by_operation_id(operation_id).await?.is_some() {
                return Err(AppError::Conflict(
                    "Invitation with this operationId already exists".to_string(),
                ));
            }
        }

        Ok(())
    }
}
