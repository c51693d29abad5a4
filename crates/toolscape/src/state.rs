//! Shared application state.

use std::sync::Arc;

use toolscape_core::catalog::{default_catalog, ToolCategory};

use crate::config::Config;

/// Shared application state, cloned into each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The tool listing rendered on the landing page.
    pub catalog: Arc<Vec<ToolCategory>>,
    /// Environment-derived configuration.
    pub config: Config,
}

impl AppState {
    /// Creates state carrying the built-in catalog.
    pub fn new(config: Config) -> Self {
        Self {
            catalog: Arc::new(default_catalog()),
            config,
        }
    }

    /// Replaces the catalog (useful for testing).
    pub fn with_catalog(mut self, catalog: Vec<ToolCategory>) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
