//! Structured call persona interface.
//!
//! POST /getPhilosopherResponseCallable - `{ data: { message, philosopherId, conversationHistory? } }`

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use stoa_types::request::{PersonaReply, PersonaRequestBody};

use crate::http::error::CallableError;
use crate::http::extractors::LenientJson;
use crate::http::extractors::body::from_object_or_default;
use crate::http::response::{CallableRequest, CallableResult};
use crate::state::AppState;

use super::log_failure;

/// POST /getPhilosopherResponseCallable - Generate one in-character reply.
///
/// 200 `{ result: { success: true, response } }`; failures are
/// `{ error: { status, message } }` with `invalid-argument` (400) or
/// `internal` (500).
pub async fn get_persona_response_callable(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<CallableRequest>,
) -> Result<Json<CallableResult<PersonaReply>>, CallableError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();
    let body: PersonaRequestBody = request
        .data
        .map(from_object_or_default)
        .unwrap_or_default();

    match state.persona_service.respond(body).await {
        Ok(reply) => {
            tracing::info!(
                %request_id,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Persona reply sent"
            );
            Ok(Json(CallableResult::new(PersonaReply::ok(reply))))
        }
        Err(e) => {
            log_failure("callable", &request_id, &e);
            Err(e.into())
        }
    }
}
