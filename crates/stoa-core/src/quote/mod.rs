//! Quote fetcher: one GET, two fields, one display surface.

pub mod fetcher;

pub use fetcher::{QuoteDisplay, QuoteFetcher, QuoteOutcome, QuoteSource};
