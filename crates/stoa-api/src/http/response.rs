//! Response envelopes for the structured call interface.
//!
//! Success and failure use different top-level keys:
//! ```json
//! { "result": { "success": true, "response": "..." } }
//! { "error": { "status": "invalid-argument", "message": "..." } }
//! ```
//! The plain interface has no envelope; it returns `PersonaReply` directly.

use serde::{Deserialize, Serialize};

/// Incoming structured call: the payload sits under `data`.
///
/// `data` stays a raw value so its shape can be checked before it is read
/// as a persona payload.
#[derive(Debug, Default, Deserialize)]
pub struct CallableRequest {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Successful structured call.
#[derive(Debug, Serialize)]
pub struct CallableResult<T: Serialize> {
    pub result: T,
}

impl<T: Serialize> CallableResult<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Failed structured call.
#[derive(Debug, Serialize)]
pub struct CallableErrorBody {
    pub error: CallableErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct CallableErrorDetail {
    /// Machine-readable status, e.g. `invalid-argument` or `internal`.
    pub status: &'static str,
    pub message: String,
}
