//! Shared domain types for Stoa.
//!
//! This crate contains the core domain types used across the workspace:
//! personas, chat messages, completion requests, persona requests and
//! responses, quotes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, thiserror and secrecy.

pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod quote;
pub mod request;
