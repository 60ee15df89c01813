//! User service

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    constants::error_messages,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::{UserDto, UserId},
    utils::{generate_user_id, hash_password, require_field},
};

/// Business operations on user accounts consumed by the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by public id
    async fn get_user_by_user_id(&self, user_id: &UserId) -> AppResult<UserDto>;

    /// Get user by email
    async fn get_user(&self, email: &str) -> AppResult<UserDto>;

    /// List users, `page` is 1-based
    async fn list_users(&self, page: u32, limit: u32) -> AppResult<Vec<UserDto>>;

    /// Create a new user
    async fn create_user(&self, user: UserDto) -> AppResult<UserDto>;

    /// Update an existing user's profile
    async fn update_user(&self, user_id: &UserId, user: UserDto) -> AppResult<UserDto>;

    /// Delete a user
    async fn delete_user(&self, user_id: &UserId) -> AppResult<()>;
}

/// Postgres-backed user service
#[derive(Clone)]
pub struct PgUserService {
    pool: PgPool,
}

impl PgUserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn not_found() -> AppError {
        AppError::NotFound(error_messages::NO_RECORD_FOUND.to_string())
    }
}

#[async_trait]
impl UserService for PgUserService {
    async fn get_user_by_user_id(&self, user_id: &UserId) -> AppResult<UserDto> {
        UserRepository::find_by_user_id(&self.pool, user_id.as_str())
            .await?
            .map(UserDto::from)
            .ok_or_else(Self::not_found)
    }

    async fn get_user(&self, email: &str) -> AppResult<UserDto> {
        UserRepository::find_by_email(&self.pool, email)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| AppError::NotFound(format!("User with email {} not found", email)))
    }

    async fn list_users(&self, page: u32, limit: u32) -> AppResult<Vec<UserDto>> {
        let offset = (page.max(1) - 1) as i64 * limit as i64;

        let users = UserRepository::list(&self.pool, offset, limit as i64).await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    async fn create_user(&self, user: UserDto) -> AppResult<UserDto> {
        let email = require_field(user.email.as_deref())?;
        let password = require_field(user.password.as_deref())?;

        match self.get_user(email).await {
            Ok(_) => {
                return Err(AppError::AlreadyExists(
                    error_messages::RECORD_ALREADY_EXISTS.to_string(),
                ));
            }
            Err(AppError::NotFound(_)) => {}
            Err(err) => return Err(err),
        }

        let public_id = generate_user_id();
        let encrypted_password = hash_password(password)?;

        let stored = UserRepository::create(
            &self.pool,
            &public_id,
            &user.first_name,
            user.last_name.as_deref(),
            email,
            &encrypted_password,
        )
        .await?;

        tracing::info!(user_id = %stored.user_id, "User created");

        Ok(stored.into())
    }

    async fn update_user(&self, user_id: &UserId, user: UserDto) -> AppResult<UserDto> {
        let updated = UserRepository::update_names(
            &self.pool,
            user_id.as_str(),
            &user.first_name,
            user.last_name.as_deref(),
        )
        .await?
        .ok_or_else(Self::not_found)?;

        tracing::debug!(user_id = %user_id, "User updated");

        Ok(updated.into())
    }

    async fn delete_user(&self, user_id: &UserId) -> AppResult<()> {
        if !UserRepository::delete(&self.pool, user_id.as_str()).await? {
            return Err(Self::not_found());
        }

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
