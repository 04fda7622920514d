//! Business logic and port definitions for Stoa.
//!
//! This crate defines the "ports" (provider and quote traits) that the
//! infrastructure layer implements, plus the persona pipeline itself. It
//! depends only on `stoa-types` -- never on `stoa-infra` or any HTTP crate.

pub mod llm;
pub mod persona;
pub mod quote;
