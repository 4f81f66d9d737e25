//! Application state for the hours engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, OvertimePolicy};

/// Shared application state.
///
/// Holds the loaded policy configuration. Handlers only read it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded policy configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the server's default overtime policy.
    pub fn policy(&self) -> &OvertimePolicy {
        self.config.policy()
    }
}
