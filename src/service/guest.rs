//! Guest service: CRUD with uniqueness rules and list pagination.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::guest::GuestRepository,
    error::AppError,
    model::guest::{CreateGuestParams, Guest, UpdateGuestParams},
    util::pagination::{slice_params, ListResult, Paginated},
};

/// Service providing business logic for guest management.
pub struct GuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuestService<'a> {
    /// Creates a new GuestService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a guest after checking the unique name and operationId.
    pub async fn create(&self, params: CreateGuestParams) -> Result<Guest, AppError> {
        let repo = GuestRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(
                "Guest with this name already exists".to_string(),
            ));
        }

        if let Some(operation_id) = &params.operation_id {
            if repo.find_by_operation_id(operation_id).await?.is_some() {
                return Err(AppError::Conflict(
                    "Guest with this operationId already exists".to_string(),
                ));
            }
        }

        Ok(repo.create(params).await?)
    }

    /// Lists guests, optionally filtered by invitation and paginated.
    ///
    /// Pagination applies only when both `page` and `limit` are present;
    /// otherwise the full list is returned.
    pub async fn get_all(
        &self,
        invitation_id: Option<Uuid>,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<ListResult<Guest>, AppError> {
        let repo = GuestRepository::new(self.db);
        let slice = slice_params(page, limit);

        let data = repo.find_all(invitation_id, slice).await?;

        match slice {
            Some((_, limit)) => {
                let total = repo.count(invitation_id).await?;
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

    /// Loads one guest by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Guest, AppError> {
        GuestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Applies a partial update to a guest.
    pub async fn update(&self, id: Uuid, params: UpdateGuestParams) -> Result<Guest, AppError> {
        GuestRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".to_string()))
    }

    /// Deletes a guest by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = GuestRepository::new(self.db).delete(id).await?;

        if deleted {
            Ok(())
        } else {
            Err(AppError::NotFound("Guest not found".to_string()))
        }
    }
}
