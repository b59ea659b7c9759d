//! Transport seam for `POST /api/register`.
//!
//! DESIGN
//! ======
//! Transports only move bytes: they serialize the input, send it, and hand
//! back the raw status and body. Deciding what a reply means lives in
//! [`SubmitOutcome::from_reply`] so every transport reports failures with the
//! same wording.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::time::Duration;

use crate::types::{ErrorBody, RegisterResponse, RegistrationInput};

/// Raw HTTP reply to a registration POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// A registration request that never produced an HTTP reply.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request could not be built or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),
    /// No reply arrived within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Sends one registration to the service.
///
/// Implementations must issue exactly one request per call with a JSON body
/// equal to `input`. The returned future is not required to be `Send` so the
/// browser transport can run on the local executor.
pub trait RegistrationApi {
    fn post_registration(&self, input: &RegistrationInput) -> impl Future<Output = Result<HttpReply, SubmitError>>;
}

/// Interpretation of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `201 Created` with an identifier.
    Created { id: String },
    /// Any other reply. `message` is the body's `message` field when present.
    Rejected { message: Option<String> },
    /// No reply at all.
    Unreachable,
}

impl SubmitOutcome {
    /// Classify a transport result.
    #[must_use]
    pub fn from_result(result: &Result<HttpReply, SubmitError>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(reply),
            Err(_) => Self::Unreachable,
        }
    }

    /// Classify a reply by status and body.
    ///
    /// A 201 whose body carries no `id`, or an empty one, is treated as a
    /// rejection without a message, since there is nothing to confirm.
    #[must_use]
    pub fn from_reply(reply: &HttpReply) -> Self {
        if reply.status == 201 {
            return match serde_json::from_str::<RegisterResponse>(&reply.body) {
                Ok(created) if !created.id.is_empty() => Self::Created { id: created.id },
                Ok(_) | Err(_) => Self::Rejected { message: None },
            };
        }
        let message = serde_json::from_str::<ErrorBody>(&reply.body)
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.is_empty());
        Self::Rejected { message }
    }
}
