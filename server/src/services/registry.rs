//! In-memory registration store.
//!
//! DESIGN
//! ======
//! Registrations live in an append-only `Vec` behind a `tokio` `RwLock`.
//! Nothing is written to disk; a restart starts from an empty list.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::sync::Arc;

use registration::{Registration, RegistrationInput};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("All fields are required")]
    MissingFields,
}

/// Shared handle to the registration list. Clones share storage.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Arc<RwLock<Vec<Registration>>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a registration and return it with its new ID.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingFields`] if any field is blank.
    pub async fn register(&self, input: RegistrationInput) -> Result<Registration, RegistryError> {
        if !input.is_complete() {
            return Err(RegistryError::MissingFields);
        }

        let registration = Registration::from_input(Uuid::new_v4().to_string(), input, OffsetDateTime::now_utc());
        let total = {
            let mut entries = self.entries.write().await;
            entries.push(registration.clone());
            entries.len()
        };

        tracing::info!(
            id = %registration.id,
            total,
            name = %registration.name,
            email = %registration.email,
            company = %registration.company,
            "new registration"
        );
        Ok(registration)
    }

    /// All registrations, newest first.
    pub async fn list_newest_first(&self) -> Vec<Registration> {
        self.entries.read().await.iter().rev().cloned().collect()
    }
}
