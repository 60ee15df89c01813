//! User repository

use sqlx::PgPool;

use crate::{error::AppResult, models::UserEntity};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        first_name: &str,
        last_name: Option<&str>,
        email: &str,
        encrypted_password: &str,
    ) -> AppResult<UserEntity> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (user_id, first_name, last_name, email, encrypted_password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(encrypted_password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by public user id
    pub async fn find_by_user_id(pool: &PgPool, user_id: &str) -> AppResult<Option<UserEntity>> {
        let user = sqlx::query_as::<_, UserEntity>(r#"SELECT * FROM users WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<UserEntity>> {
        let user = sqlx::query_as::<_, UserEntity>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Update a user's name fields
    pub async fn update_names(
        pool: &PgPool,
        user_id: &str,
        first_name: &str,
        last_name: Option<&str>,
    ) -> AppResult<Option<UserEntity>> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            UPDATE users
            SET
                first_name = $2,
                last_name = $3,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Delete user, returning whether a row was removed
    pub async fn delete(pool: &PgPool, user_id: &str) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE user_id = $1"#)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List users with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<UserEntity>> {
        let users = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT * FROM users
            ORDER BY id ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }
}
