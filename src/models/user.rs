//! User model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::MAX_USER_ID_LENGTH;

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub user_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub encrypted_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Internal user representation shared between handlers and the user service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDto {
    pub id: i64,
    pub user_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Plaintext, only populated on the way into the service
    pub password: Option<String>,
    pub encrypted_password: Option<String>,
}

impl From<UserEntity> for UserDto {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: Some(entity.email),
            password: None,
            encrypted_password: Some(entity.encrypted_password),
        }
    }
}

/// Public user identifier as it appears in request paths
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("User id cannot be empty".to_string());
        }
        if value.len() > MAX_USER_ID_LENGTH {
            return Err(format!(
                "User id must be at most {} characters",
                MAX_USER_ID_LENGTH
            ));
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("User id can only contain letters and numbers".to_string());
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for UserId {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
