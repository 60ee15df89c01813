//! User response DTOs

use serde::Serialize;

use crate::models::UserDto;

/// Public user representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRest {
    pub user_id: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<UserDto> for UserRest {
    fn from(user: UserDto) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Name of the operation reported in an [`OperationStatusModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestOperationName {
    Delete,
}

/// Outcome reported in an [`OperationStatusModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestOperationStatus {
    Success,
    Error,
}

/// Status record returned by operations without a resource body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatusModel {
    pub operation_name: RequestOperationName,
    pub operation_result: RequestOperationStatus,
}

impl OperationStatusModel {
    pub fn new(operation_name: RequestOperationName, operation_result: RequestOperationStatus) -> Self {
        Self {
            operation_name,
            operation_result,
        }
    }
}
