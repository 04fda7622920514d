//! Infrastructure layer for Stoa.
//!
//! Contains implementations of the ports defined in `stoa-core`: the
//! OpenAI-compatible completion provider, the reqwest-backed quote source,
//! plus file loaders for `stoa.toml` and persona files and API key lookup.

pub mod config;
pub mod llm;
pub mod persona_file;
pub mod quote;
pub mod secret;
