//! Quote fetcher ports and the fetch-and-display operation.
//!
//! A failed fetch (network, status, or malformed body) leaves the display
//! untouched and is returned as `QuoteOutcome::Unavailable` after being
//! logged. It never propagates as an `Err` past `fetch_and_display`.

use std::future::Future;

use tracing::{info, warn};

use stoa_types::error::QuoteError;
use stoa_types::quote::Quote;

/// Where quotes come from.
pub trait QuoteSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<Quote, QuoteError>> + Send;
}

/// Where the two quote fields are shown.
pub trait QuoteDisplay {
    fn show_quote(&mut self, quote: &str);
    fn show_author(&mut self, author: &str);
}

/// Terminal result of one fetch.
#[derive(Debug)]
pub enum QuoteOutcome {
    /// Both fields were delivered to the display.
    Displayed(Quote),
    /// Nothing was displayed.
    Unavailable(QuoteError),
}

impl QuoteOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, QuoteOutcome::Displayed(_))
    }
}

pub struct QuoteFetcher<S: QuoteSource> {
    source: S,
}

impl<S: QuoteSource> QuoteFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch once and, on success, set both display fields.
    pub async fn fetch_and_display<D: QuoteDisplay>(&self, display: &mut D) -> QuoteOutcome {
        match self.source.fetch().await {
            Ok(quote) => {
                display.show_quote(&quote.quote);
                display.show_author(&quote.author);
                info!(author = %quote.author, "Quote displayed");
                QuoteOutcome::Displayed(quote)
            }
            Err(err) => {
                warn!(error = %err, "Quote unavailable");
                QuoteOutcome::Unavailable(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<Quote, fn() -> QuoteError>);

    impl QuoteSource for FixedSource {
        fn fetch(&self) -> impl Future<Output = Result<Quote, QuoteError>> + Send {
            let result = match &self.0 {
                Ok(quote) => Ok(quote.clone()),
                Err(make) => Err(make()),
            };
            async move { result }
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        quote: Option<String>,
        author: Option<String>,
    }

    impl QuoteDisplay for RecordingDisplay {
        fn show_quote(&mut self, quote: &str) {
            self.quote = Some(quote.to_string());
        }

        fn show_author(&mut self, author: &str) {
            self.author = Some(author.to_string());
        }
    }

    #[tokio::test]
    async fn successful_fetch_sets_both_fields() {
        let fetcher = QuoteFetcher::new(FixedSource(Ok(Quote {
            quote: "Q".to_string(),
            author: "A".to_string(),
        })));
        let mut display = RecordingDisplay::default();

        let outcome = fetcher.fetch_and_display(&mut display).await;

        assert!(outcome.is_displayed());
        assert_eq!(display.quote.as_deref(), Some("Q"));
        assert_eq!(display.author.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn network_failure_leaves_display_untouched() {
        let fetcher = QuoteFetcher::new(FixedSource(Err(|| {
            QuoteError::Network("connection refused".to_string())
        })));
        let mut display = RecordingDisplay {
            quote: Some("previous".to_string()),
            author: None,
        };

        let outcome = fetcher.fetch_and_display(&mut display).await;

        assert!(matches!(outcome, QuoteOutcome::Unavailable(QuoteError::Network(_))));
        assert_eq!(display.quote.as_deref(), Some("previous"));
        assert!(display.author.is_none());
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let fetcher = QuoteFetcher::new(FixedSource(Err(|| {
            QuoteError::Decode("expected value at line 1".to_string())
        })));
        let mut display = RecordingDisplay::default();

        let outcome = fetcher.fetch_and_display(&mut display).await;

        assert!(!outcome.is_displayed());
        assert!(display.quote.is_none());
    }
}
