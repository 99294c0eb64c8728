//! Shared state handed to every handler.

use std::sync::Arc;

use ferry_scenario::ScenarioDefaults;

#[derive(Clone)]
pub struct AppState {
    pub defaults:     Arc<ScenarioDefaults>,
    /// Seed used when a request omits one.  `None` draws a fresh seed per request.
    pub default_seed: Option<u64>,
}

impl AppState {
    pub fn new(defaults: ScenarioDefaults, default_seed: Option<u64>) -> Self {
        Self { defaults: Arc::new(defaults), default_seed }
    }

    pub fn seed(&self, requested: Option<u64>) -> u64 {
        requested.or(self.default_seed).unwrap_or_else(rand::random)
    }
}
