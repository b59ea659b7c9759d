//! Registration routes: `POST /api/register` and `GET /api/registrations`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use registration::{ErrorBody, RegisterResponse, Registration, RegistrationInput};

use crate::services::registry::RegistryError;
use crate::state::AppState;

const INVALID_JSON_MESSAGE: &str = "Invalid JSON";
const CREATED_MESSAGE: &str = "Registration successful";

/// JSON error reply carrying a user-facing `message`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::MissingFields => Self::bad_request(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { message: self.message })).into_response()
    }
}

/// `POST /api/register`: validate and store one registration.
///
/// The body is parsed by hand so a malformed payload still gets a JSON
/// `{ "message": ... }` reply the page can show.
pub async fn register(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let input: RegistrationInput = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting malformed registration body");
        ApiError::bad_request(INVALID_JSON_MESSAGE)
    })?;

    let stored = state.registry.register(input).await?;

    let reply = RegisterResponse { message: Some(CREATED_MESSAGE.to_owned()), id: stored.id };
    Ok((StatusCode::CREATED, Json(reply)).into_response())
}

/// `GET /api/registrations`: every registration, newest first.
pub async fn list_registrations(State(state): State<AppState>) -> Json<Vec<Registration>> {
    Json(state.registry.list_newest_first().await)
}
