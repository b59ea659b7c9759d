//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; the registry is Arc-backed.

use crate::services::registry::Registry;

#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Registry,
    /// Reported by the health check.
    pub service_name: String,
}

impl AppState {
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { registry: Registry::new(), service_name: service_name.into() }
    }
}
