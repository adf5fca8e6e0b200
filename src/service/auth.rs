//! Authentication service: registration, login, and profile lookup.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, LoginParams, RegisterParams, User},
};

/// Valid bcrypt hash that no real password verifies against. Login runs a
/// verification against this when the email is unknown, so both failure
/// paths cost one bcrypt comparison and return the same message.
const DUMMY_HASH: &str = "$2b$10$h.uYw3jwWjPrkM.kU8BdjegNr0zuwdBBmgnpUvahf6yooRnj3iBdy";

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Service providing account registration and credential verification.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Work factor for password hashing
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Registers a new account with the default `user` role.
    ///
    /// # Arguments
    /// - `params` - Email, plaintext password, and optional display name
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = bcrypt::hash(&params.password, self.bcrypt_cost)?;

        let user = repo
            .create(CreateUserParams {
                email: params.email,
                password_hash,
                name: params.name,
                role: entity::user::UserRole::User,
            })
            .await?;

        Ok(user)
    }

    /// Verifies credentials and returns the account on success.
    ///
    /// Unknown email and wrong password are indistinguishable from the
    /// outside: both run one bcrypt comparison and both return the same
    /// 401 message, so the endpoint cannot be used to enumerate accounts.
    ///
    /// # Arguments
    /// - `params` - Email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AppError::Unauthorized)` - Unknown email or wrong password
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn login(&self, params: LoginParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo.find_by_email(&params.email).await?;

        match user {
            Some(user) => {
                if bcrypt::verify(&params.password, &user.password_hash)? {
                    Ok(user)
                } else {
                    Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
                }
            }
            None => {
                // Burn a comparison so the timing matches the known-email path.
                let _ = bcrypt::verify(&params.password, DUMMY_HASH);
                Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    /// Loads the profile of an authenticated user.
    ///
    /// # Arguments
    /// - `user_id` - Subject id from the verified token
    ///
    /// # Returns
    /// - `Ok(User)` - The account
    /// - `Err(AppError::NotFound)` - The account no longer exists
    pub async fn get_profile(&self, user_id: Uuid) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
