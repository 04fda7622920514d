//! `stoa quote`: fetch one Stoic quote and print it.

use anyhow::Result;
use console::style;

use stoa_core::quote::{QuoteDisplay, QuoteFetcher, QuoteOutcome};
use stoa_infra::quote::HttpQuoteSource;

/// Terminal display surface: collects both fields, then prints them together.
#[derive(Debug, Default)]
pub struct TerminalQuoteDisplay {
    quote: Option<String>,
    author: Option<String>,
}

impl QuoteDisplay for TerminalQuoteDisplay {
    fn show_quote(&mut self, quote: &str) {
        self.quote = Some(quote.to_string());
    }

    fn show_author(&mut self, author: &str) {
        self.author = Some(author.to_string());
    }
}

impl TerminalQuoteDisplay {
    fn render(&self) {
        let (Some(quote), Some(author)) = (&self.quote, &self.author) else {
            return;
        };
        println!();
        println!("  {}", style(format!("\u{201c}{quote}\u{201d}")).italic());
        println!("  {}", style(format!("- {author}")).dim());
        println!();
    }
}

const UNAVAILABLE_NOTICE: &str = "No quote available right now.";

/// Notice printed when no quote could be fetched; silent under `--quiet`.
fn unavailable_notice(quiet: bool) -> Option<&'static str> {
    (!quiet).then_some(UNAVAILABLE_NOTICE)
}

/// Fetch a quote from `url` and print it.
///
/// An unavailable quote is not a command failure: the display stays empty
/// and a dim notice is printed instead, unless `quiet` is set.
pub async fn quote(url: &str, json: bool, quiet: bool) -> Result<()> {
    let fetcher = QuoteFetcher::new(HttpQuoteSource::new(url));
    let mut display = TerminalQuoteDisplay::default();

    match fetcher.fetch_and_display(&mut display).await {
        QuoteOutcome::Displayed(quote) if json => {
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        QuoteOutcome::Displayed(_) => display.render(),
        QuoteOutcome::Unavailable(err) if json => {
            let body = serde_json::json!({ "quote": null, "error": err.to_string() });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        QuoteOutcome::Unavailable(_) => {
            if let Some(notice) = unavailable_notice(quiet) {
                println!("  {}", style(notice).dim());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_collects_both_fields() {
        let mut display = TerminalQuoteDisplay::default();
        display.show_quote("Waste no more time arguing what a good man should be.");
        display.show_author("Marcus Aurelius");

        assert_eq!(
            display.quote.as_deref(),
            Some("Waste no more time arguing what a good man should be.")
        );
        assert_eq!(display.author.as_deref(), Some("Marcus Aurelius"));
    }

    #[test]
    fn unavailable_notice_respects_quiet() {
        assert_eq!(unavailable_notice(false), Some(UNAVAILABLE_NOTICE));
        assert_eq!(unavailable_notice(true), None);
    }
}
