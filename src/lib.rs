//! UserHub - User Account REST Service
//!
//! This library provides the building blocks of the UserHub server, a small
//! HTTP service exposing create, read, update and delete operations over
//! user accounts.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers, mapping wire models to DTOs (thin layer)
//! - **Services**: Business logic behind the [`services::UserService`] trait
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
