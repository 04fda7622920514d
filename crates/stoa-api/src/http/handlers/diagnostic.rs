//! Diagnostic endpoint.
//!
//! GET /testPhilosopherResponse - liveness plus the persona keys on offer.

use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub message: &'static str,
    pub timestamp: String,
    pub philosophers_available: Vec<String>,
}

/// GET /testPhilosopherResponse - Never calls the completion API.
pub async fn test_persona_response(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(DiagnosticReport {
        message: "Persona service is working!",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        philosophers_available: state
            .registry()
            .keys()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
