//! Shared registration model and submission flow for the meetup page.
//!
//! This crate owns the wire types used by `server`, `client`, and `cli`, plus
//! the explicit state machine that drives one registration attempt. Transport
//! sits behind [`RegistrationApi`] so the browser (`gloo-net`) and the CLI
//! (`reqwest`) share the same success and error semantics.

mod api;
mod config;
mod flow;
mod types;

pub use api::{HttpReply, RegistrationApi, SubmitError, SubmitOutcome};
pub use config::{
    BackendConfig, ConfigError, DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_SECS, HEALTH_PATH, REGISTER_PATH,
    REGISTRATIONS_PATH,
};
pub use flow::{GENERIC_FAILURE_MESSAGE, MISSING_FIELDS_MESSAGE, NETWORK_ERROR_MESSAGE, RegistrationFlow, submit};
pub use types::{
    ErrorBody, Field, HealthStatus, RegisterResponse, Registration, RegistrationInput, RegistrationResult, Role,
};
