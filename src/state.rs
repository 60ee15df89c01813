//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, services::UserService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// User service the handlers delegate to
    users: Arc<dyn UserService>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(users: Arc<dyn UserService>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { users, config }),
        }
    }

    /// Get a reference to the user service
    pub fn users(&self) -> &dyn UserService {
        self.inner.users.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
