//! Business logic services

pub mod user_service;

pub use user_service::{PgUserService, UserService};

#[cfg(test)]
pub use user_service::MockUserService;
