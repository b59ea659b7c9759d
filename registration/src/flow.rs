//! Registration flow: field state plus the submission lifecycle.
//!
//! DESIGN
//! ======
//! The flow is an explicit state machine:
//!
//! ```text
//! Editing{error} --begin_submit--> Submitting --finish(201)--> Done(result)
//!        ^                              |                          |
//!        +-------- finish(other) -------+                          |
//!        +------------------------- reset -------------------------+
//! ```
//!
//! Submission is split into `begin_submit` and `finish` so a UI driver can
//! suspend on the network between the two while the state stays observable.
//! `begin_submit` refuses to start a second request while one is in flight.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::api::{HttpReply, RegistrationApi, SubmitError, SubmitOutcome};
use crate::types::{Field, RegistrationInput, RegistrationResult};

/// Shown when the service rejects the request without a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";
/// Shown when no reply arrives.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
/// Shown when a submit is attempted with a blank field.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// Lifecycle phase of one registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// Fields are editable. `error` holds the last failure, if any.
    Editing { error: Option<String> },
    /// A request is in flight; fields are frozen.
    Submitting,
    /// The service accepted the registration.
    Done(RegistrationResult),
}

impl Default for Phase {
    fn default() -> Self {
        Self::Editing { error: None }
    }
}

/// Form fields and submission phase for one registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFlow {
    fields: RegistrationInput,
    phase: Phase,
}

impl RegistrationFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &RegistrationInput {
        &self.fields
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Editing { error } => error.as_deref(),
            Phase::Submitting | Phase::Done(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&RegistrationResult> {
        match &self.phase {
            Phase::Done(result) => Some(result),
            Phase::Editing { .. } | Phase::Submitting => None,
        }
    }

    /// Merge one field and dismiss the last error.
    ///
    /// Ignored unless the flow is editing.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if let Phase::Editing { error } = &mut self.phase {
            self.fields.set(field, value.into());
            *error = None;
        }
    }

    /// Enter `Submitting` and return the payload to send.
    ///
    /// Returns `None` when a request is already in flight, the flow is done,
    /// or a field is blank. The blank case records [`MISSING_FIELDS_MESSAGE`].
    pub fn begin_submit(&mut self) -> Option<RegistrationInput> {
        if !matches!(self.phase, Phase::Editing { .. }) {
            return None;
        }
        if !self.fields.is_complete() {
            self.phase = Phase::Editing { error: Some(MISSING_FIELDS_MESSAGE.to_owned()) };
            return None;
        }
        self.phase = Phase::Submitting;
        Some(self.fields.clone())
    }

    /// Resolve the in-flight request.
    ///
    /// Returns the confirmed result on success. A call outside `Submitting`
    /// is ignored and returns `None`.
    pub fn finish(&mut self, reply: Result<HttpReply, SubmitError>) -> Option<RegistrationResult> {
        if !self.is_submitting() {
            return None;
        }
        match SubmitOutcome::from_result(&reply) {
            SubmitOutcome::Created { id } => {
                let result = RegistrationResult { input: self.fields.clone(), id };
                self.phase = Phase::Done(result.clone());
                Some(result)
            }
            SubmitOutcome::Rejected { message } => {
                let message = message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
                self.phase = Phase::Editing { error: Some(message) };
                None
            }
            SubmitOutcome::Unreachable => {
                self.phase = Phase::Editing { error: Some(NETWORK_ERROR_MESSAGE.to_owned()) };
                None
            }
        }
    }

    /// Return to the empty initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Drive one full submission against `api`.
///
/// Returns the confirmed result on success; on failure the flow carries the
/// error message.
pub async fn submit<A: RegistrationApi>(flow: &mut RegistrationFlow, api: &A) -> Option<RegistrationResult> {
    let input = flow.begin_submit()?;
    let reply = api.post_registration(&input).await;
    flow.finish(reply)
}
