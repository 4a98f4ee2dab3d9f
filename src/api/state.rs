//! Application state for the wage engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollConfig;

/// Shared application state.
///
/// Holds the payroll configuration the handlers compute against. The
/// configuration is read-only once the server has started.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<PayrollConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PayrollConfig::default())
    }
}
