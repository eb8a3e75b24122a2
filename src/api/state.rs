//! Shared state for the payslip HTTP handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// The tax configuration every request is calculated against.
///
/// Loaded and validated once at startup. Cloning only bumps the reference
/// count, so each handler sees the same table.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a validated configuration for use by the router.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the tax table and super policy in use.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
