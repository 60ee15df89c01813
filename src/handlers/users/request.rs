//! User request DTOs

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    constants::{error_messages::MISSING_REQUIRED_FIELD, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH},
    models::UserDto,
};

/// Create/update user request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsRequestModel {
    #[validate(
        required(message = "missing required field"),
        custom(function = "not_empty"),
        length(max = MAX_NAME_LENGTH, message = "firstName is too long")
    )]
    pub first_name: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH, message = "lastName is too long"))]
    pub last_name: Option<String>,

    #[validate(
        email(message = "email is not a valid address"),
        length(max = MAX_EMAIL_LENGTH, message = "email is too long")
    )]
    pub email: Option<String>,

    pub password: Option<String>,
}

fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(MISSING_REQUIRED_FIELD.into());
        return Err(err);
    }

    Ok(())
}

/// Only called after `validate()` has accepted the request
impl From<UserDetailsRequestModel> for UserDto {
    fn from(details: UserDetailsRequestModel) -> Self {
        Self {
            first_name: details.first_name.unwrap_or_default(),
            last_name: details.last_name,
            email: details.email,
            password: details.password,
            ..Self::default()
        }
    }
}

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
