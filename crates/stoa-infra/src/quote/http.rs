//! reqwest-backed quote source.
//!
//! Issues a single unauthenticated GET and decodes `{ quote, author }`.

use std::future::Future;

use tracing::debug;

use stoa_core::quote::QuoteSource;
use stoa_types::error::QuoteError;
use stoa_types::quote::Quote;

pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_quote(&self) -> Result<Quote, QuoteError> {
        debug!(url = %self.url, "Fetching quote");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        serde_json::from_str::<Quote>(&body).map_err(|e| QuoteError::Decode(e.to_string()))
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> impl Future<Output = Result<Quote, QuoteError>> + Send {
        self.fetch_quote()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a random local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/stoic-quote")
    }

    #[tokio::test]
    async fn decodes_quote_and_author() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"quote":"Q","author":"A"}"#).await;
        let quote = HttpQuoteSource::new(url).fetch().await.unwrap();
        assert_eq!(
            quote,
            Quote {
                quote: "Q".to_string(),
                author: "A".to_string()
            }
        );
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let url = serve_once("HTTP/1.1 200 OK", "<html>oops</html>").await;
        let err = HttpQuoteSource::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, QuoteError::Decode(_)));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;
        let err = HttpQuoteSource::new(url).fetch().await.unwrap_err();
        assert!(matches!(err, QuoteError::Status(503)));
    }

    #[tokio::test]
    async fn refused_connection_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpQuoteSource::new(format!("http://{addr}/stoic-quote"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::Network(_)));
    }
}
