//! `GET /health` liveness probe.

use axum::extract::State;
use axum::response::Json;
use registration::HealthStatus;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default();
    Json(HealthStatus { status: "healthy".to_owned(), service: state.service_name, timestamp })
}
