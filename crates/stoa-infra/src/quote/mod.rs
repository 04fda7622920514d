//! Quote source implementations.

pub mod http;

pub use http::HttpQuoteSource;
