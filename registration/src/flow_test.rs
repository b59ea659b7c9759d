use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use futures::executor::block_on;

use super::*;

/// Scripted transport that records every payload it is asked to send.
struct FakeApi {
    reply: RefCell<Option<Result<HttpReply, SubmitError>>>,
    sent: RefCell<Vec<RegistrationInput>>,
}

impl FakeApi {
    fn replying(status: u16, body: &str) -> Self {
        Self { reply: RefCell::new(Some(Ok(HttpReply::new(status, body)))), sent: RefCell::new(Vec::new()) }
    }

    fn failing(err: SubmitError) -> Self {
        Self { reply: RefCell::new(Some(Err(err))), sent: RefCell::new(Vec::new()) }
    }
}

impl RegistrationApi for FakeApi {
    fn post_registration(&self, input: &RegistrationInput) -> impl Future<Output = Result<HttpReply, SubmitError>> {
        self.sent.borrow_mut().push(input.clone());
        let reply = self.reply.borrow_mut().take().expect("fake api called more than once");
        async move { reply }
    }
}

fn filled_flow() -> RegistrationFlow {
    let mut flow = RegistrationFlow::new();
    flow.update_field(Field::Name, "A");
    flow.update_field(Field::Email, "a@x.com");
    flow.update_field(Field::Company, "C");
    flow.update_field(Field::Role, "Student");
    flow
}

fn sample_input() -> RegistrationInput {
    RegistrationInput::new("A", "a@x.com", "C", "Student")
}

// =============================================================================
// submit
// =============================================================================

#[test]
fn submit_posts_exactly_once_with_the_current_input() {
    let api = FakeApi::replying(201, r#"{"id":"abc123"}"#);
    let mut flow = filled_flow();
    let _ = block_on(submit(&mut flow, &api));
    assert_eq!(*api.sent.borrow(), vec![sample_input()]);
}

#[test]
fn created_reply_yields_result_with_input_and_id() {
    let api = FakeApi::replying(201, r#"{"message":"Registration successful","id":"abc123"}"#);
    let mut flow = filled_flow();

    let result = block_on(submit(&mut flow, &api)).expect("registration should succeed");

    assert_eq!(result, RegistrationResult { input: sample_input(), id: "abc123".into() });
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({ "name": "A", "email": "a@x.com", "company": "C", "role": "Student", "id": "abc123" })
    );
    assert_eq!(flow.result(), Some(&result));
    assert!(!flow.is_submitting());
    assert_eq!(flow.error_message(), None);
}

#[test]
fn rejected_reply_surfaces_message_verbatim() {
    let api = FakeApi::replying(400, r#"{"message":"Email already registered"}"#);
    let mut flow = filled_flow();

    let result = block_on(submit(&mut flow, &api));

    assert!(result.is_none());
    assert_eq!(flow.error_message(), Some("Email already registered"));
    assert!(!flow.is_submitting());
    assert_eq!(flow.fields(), &sample_input());
}

#[test]
fn rejected_reply_without_message_uses_generic_text() {
    let api = FakeApi::replying(500, "boom");
    let mut flow = filled_flow();
    assert!(block_on(submit(&mut flow, &api)).is_none());
    assert_eq!(flow.error_message(), Some(GENERIC_FAILURE_MESSAGE));
}

#[test]
fn network_failure_uses_fixed_network_message() {
    let api = FakeApi::failing(SubmitError::Transport("connection refused".into()));
    let mut flow = filled_flow();
    assert!(block_on(submit(&mut flow, &api)).is_none());
    assert_eq!(flow.error_message(), Some(NETWORK_ERROR_MESSAGE));
    assert!(!flow.is_submitting());
}

#[test]
fn timeout_is_reported_as_network_failure() {
    let api = FakeApi::failing(SubmitError::Timeout(Duration::from_secs(15)));
    let mut flow = filled_flow();
    assert!(block_on(submit(&mut flow, &api)).is_none());
    assert_eq!(flow.error_message(), Some(NETWORK_ERROR_MESSAGE));
}

#[test]
fn submit_with_empty_field_sends_nothing() {
    let api = FakeApi::replying(201, r#"{"id":"abc123"}"#);
    let mut flow = filled_flow();
    flow.update_field(Field::Company, "");

    assert!(block_on(submit(&mut flow, &api)).is_none());
    assert!(api.sent.borrow().is_empty());
    assert_eq!(flow.error_message(), Some(MISSING_FIELDS_MESSAGE));
}

#[test]
fn whitespace_name_is_posted_once_as_entered() {
    let api = FakeApi::replying(201, r#"{"id":"abc123"}"#);
    let mut flow = filled_flow();
    flow.update_field(Field::Name, " ");

    let result = block_on(submit(&mut flow, &api));

    let sent = api.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], RegistrationInput::new(" ", "a@x.com", "C", "Student"));
    assert_eq!(result.map(|r| r.id), Some("abc123".to_owned()));
    assert_eq!(flow.error_message(), None);
}

#[test]
fn created_reply_with_empty_id_shows_generic_failure() {
    let mut flow = filled_flow();
    assert!(flow.begin_submit().is_some());

    assert_eq!(flow.finish(Ok(HttpReply::new(201, r#"{"id":""}"#))), None);
    assert_eq!(flow.result(), None);
    assert_eq!(flow.error_message(), Some(GENERIC_FAILURE_MESSAGE));
}

// =============================================================================
// phase transitions
// =============================================================================

#[test]
fn submitting_holds_strictly_between_begin_and_finish() {
    let mut flow = filled_flow();
    assert!(!flow.is_submitting());

    let payload = flow.begin_submit();
    assert_eq!(payload, Some(sample_input()));
    assert!(flow.is_submitting());
    assert_eq!(flow.error_message(), None);

    flow.finish(Err(SubmitError::Transport("reset".into())));
    assert!(!flow.is_submitting());

    assert!(flow.begin_submit().is_some());
    assert!(flow.is_submitting());
    flow.finish(Ok(HttpReply::new(201, r#"{"id":"x"}"#)));
    assert!(!flow.is_submitting());
}

#[test]
fn second_begin_while_in_flight_is_refused() {
    let mut flow = filled_flow();
    assert!(flow.begin_submit().is_some());
    assert!(flow.begin_submit().is_none());
    assert!(flow.is_submitting());
}

#[test]
fn finish_outside_submitting_is_ignored() {
    let mut flow = filled_flow();
    let before = flow.clone();
    assert!(flow.finish(Ok(HttpReply::new(201, r#"{"id":"x"}"#))).is_none());
    assert_eq!(flow, before);
}

#[test]
fn fields_are_frozen_while_submitting() {
    let mut flow = filled_flow();
    let _ = flow.begin_submit();
    flow.update_field(Field::Name, "Changed");
    assert_eq!(flow.fields().name, "A");
}

#[test]
fn editing_any_field_clears_each_kind_of_error() {
    let replies = [
        Ok(HttpReply::new(400, r#"{"message":"Email already registered"}"#)),
        Ok(HttpReply::new(503, "")),
        Err(SubmitError::Transport("offline".into())),
    ];
    for reply in replies {
        for field in Field::ALL {
            let mut flow = filled_flow();
            let _ = flow.begin_submit();
            flow.finish(match &reply {
                Ok(r) => Ok(r.clone()),
                Err(_) => Err(SubmitError::Transport("offline".into())),
            });
            assert!(flow.error_message().is_some());

            let current = flow.fields().get(field).to_owned();
            flow.update_field(field, format!("{current}!"));
            assert_eq!(flow.error_message(), None, "editing {field:?} should clear the error");
        }
    }
}

#[test]
fn reset_after_success_restores_initial_state() {
    let api = FakeApi::replying(201, r#"{"id":"abc123"}"#);
    let mut flow = filled_flow();
    assert!(block_on(submit(&mut flow, &api)).is_some());

    flow.reset();
    assert_eq!(flow, RegistrationFlow::new());
    assert_eq!(flow.fields(), &RegistrationInput::default());

    flow.reset();
    assert_eq!(flow, RegistrationFlow::new());
}

#[test]
fn done_flow_ignores_edits_and_submits() {
    let mut flow = filled_flow();
    let _ = flow.begin_submit();
    flow.finish(Ok(HttpReply::new(201, r#"{"id":"abc123"}"#)));

    flow.update_field(Field::Name, "B");
    assert_eq!(flow.fields().name, "A");
    assert!(flow.begin_submit().is_none());
    assert!(flow.result().is_some());
}
