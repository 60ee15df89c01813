//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Maximum accepted request body size (1MB)
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Default time to wait for a pooled connection, in seconds
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECONDS: u64 = 5;

// =============================================================================
// USER DEFAULTS
// =============================================================================

/// Length of generated public user ids
pub const PUBLIC_USER_ID_LENGTH: usize = 30;

/// Upper bound accepted for a user id in a request path
pub const MAX_USER_ID_LENGTH: usize = 64;

/// Default number of users per page
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Maximum number of users per page
pub const MAX_PAGE_SIZE: u32 = 100;

/// Maximum length of a first or last name, matching the `users` columns
pub const MAX_NAME_LENGTH: u64 = 50;

/// Maximum length of an email address, matching the `users` column
pub const MAX_EMAIL_LENGTH: u64 = 120;

// =============================================================================
// ERROR MESSAGES
// =============================================================================

pub mod error_messages {
    pub const MISSING_REQUIRED_FIELD: &str = "missing required field";
    pub const RECORD_ALREADY_EXISTS: &str = "Record already exists";
    pub const NO_RECORD_FOUND: &str = "Record with provided id is not found";
    pub const COULD_NOT_DELETE_RECORD: &str = "Could not delete record";
    pub const SERVICE_UNAVAILABLE: &str = "User service is not available";
}
