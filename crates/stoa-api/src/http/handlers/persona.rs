//! Plain JSON persona interface.
//!
//! POST    /getPhilosopherResponse - `{ message, philosopherId, conversationHistory? }`
//! OPTIONS /getPhilosopherResponse - preflight, 204 with an empty body

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use stoa_types::request::{PersonaReply, PersonaRequestBody};

use crate::http::error::AppError;
use crate::http::extractors::LenientJson;
use crate::state::AppState;

use super::log_failure;

/// POST /getPhilosopherResponse - Generate one in-character reply.
///
/// 200 `{ success: true, response }`, 400 on validation failure, 500 for
/// everything after validation.
pub async fn get_persona_response(
    State(state): State<AppState>,
    LenientJson(body): LenientJson<PersonaRequestBody>,
) -> Result<Json<PersonaReply>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    match state.persona_service.respond(body).await {
        Ok(reply) => {
            tracing::info!(
                %request_id,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Persona reply sent"
            );
            Ok(Json(PersonaReply::ok(reply)))
        }
        Err(e) => {
            log_failure("http", &request_id, &e);
            Err(e.into())
        }
    }
}

/// OPTIONS - CORS preflight. Headers are added by the router layer.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
