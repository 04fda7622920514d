//! HTTP layer for Stoa.
//!
//! Three persona interfaces (structured call, plain JSON, diagnostic) plus a
//! health check, all sharing one `PersonaService`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
