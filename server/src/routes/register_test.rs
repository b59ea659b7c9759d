use axum::body::to_bytes;
use serde::de::DeserializeOwned;

use super::*;

fn test_state() -> AppState {
    AppState::new("test service")
}

async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post(state: &AppState, body: &str) -> Response {
    match register(State(state.clone()), Bytes::from(body.to_owned())).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

#[tokio::test]
async fn register_returns_created_with_id() {
    let state = test_state();
    let response = post(&state, r#"{"name":"A","email":"a@x.com","company":"C","role":"Student"}"#).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: RegisterResponse = json_body(response).await;
    assert_eq!(body.message.as_deref(), Some("Registration successful"));

    let stored = state.registry.list_newest_first().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, body.id);
}

#[tokio::test]
async fn register_rejects_blank_field_with_message() {
    let state = test_state();
    let response = post(&state, r#"{"name":"A","email":"","company":"C","role":"Student"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = json_body(response).await;
    assert_eq!(body.message, "All fields are required");
    assert_eq!(state.registry.list_newest_first().await.len(), 0);
}

#[tokio::test]
async fn register_treats_absent_field_as_blank() {
    let state = test_state();
    let response = post(&state, r#"{"name":"A","email":"a@x.com","company":"C"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = json_body(response).await;
    assert_eq!(body.message, "All fields are required");
}

#[tokio::test]
async fn register_rejects_malformed_json() {
    let state = test_state();
    let response = post(&state, "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = json_body(response).await;
    assert_eq!(body.message, "Invalid JSON");
}

#[tokio::test]
async fn list_registrations_returns_newest_first() {
    let state = test_state();
    for name in ["First", "Second"] {
        let body = format!(r#"{{"name":"{name}","email":"x@x.com","company":"C","role":"Other"}}"#);
        assert_eq!(post(&state, &body).await.status(), StatusCode::CREATED);
    }

    let Json(list) = list_registrations(State(state)).await;
    let names: Vec<&str> = list.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[test]
fn missing_fields_maps_to_bad_request() {
    let response = ApiError::from(RegistryError::MissingFields).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
