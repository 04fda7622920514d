//! HTTP request handlers.

pub mod callable;
pub mod diagnostic;
pub mod persona;

use stoa_types::error::PersonaError;

/// Log a failed persona request at the interface boundary.
///
/// Validation failures are the caller's fault and stay at `warn`; anything
/// after validation is logged at `error` with the underlying message.
pub(crate) fn log_failure(interface: &'static str, request_id: &str, err: &PersonaError) {
    if err.is_invalid_argument() {
        tracing::warn!(interface, request_id, error = %err, "Rejected persona request");
    } else {
        tracing::error!(interface, request_id, error = %err, "Persona request failed");
    }
}
