//! Utility functions

pub mod crypto;
pub mod validation;

pub use crypto::{generate_user_id, hash_password};
pub use validation::require_field;
