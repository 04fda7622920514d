//! Quote payload returned by the stoic quote endpoint.

use serde::{Deserialize, Serialize};

/// Default endpoint serving `{ "quote": "...", "author": "..." }`.
pub const DEFAULT_QUOTE_URL: &str = "https://api.themotivate365.com/stoic-quote";

/// A quote and its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}
