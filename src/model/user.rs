//! User domain model and auth operation parameters.

use chrono::{DateTime, Utc};
use entity::user::UserRole;
use uuid::Uuid;

use crate::dto::auth::{LoginDto, RegisterDto, RoleDto, UserDto};

impl From<UserRole> for RoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => RoleDto::User,
            UserRole::Admin => RoleDto::Admin,
        }
    }
}

/// Full user record including the stored credential hash. Only the service
/// layer sees this; `into_dto` strips the hash before anything reaches the
/// wire.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password,
            name: entity.name,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to its API DTO, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            name: dto.name,
        }
    }
}

/// Parameters for a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row; the password is already hashed by
/// the time it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: UserRole,
}
