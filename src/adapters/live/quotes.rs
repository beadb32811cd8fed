//! Live adapter for the `QuoteSource` port over HTTP.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::ports::quotes::{FetchError, Quote, QuoteFuture, QuoteSource};

/// Default random-quote endpoint.
pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";

/// Fetches quotes from a quotable-compatible JSON endpoint.
pub struct HttpQuoteSource {
    client: Client,
    url: String,
}

impl HttpQuoteSource {
    /// Creates a source calling `url` with the given request timeout.
    #[must_use]
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            url: url.to_string(),
        }
    }
}

/// Builds a client with a request timeout, falling back to the defaults.
pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("falling back to default HTTP client: {e}");
            Client::new()
        })
}

/// Response body of the random-quote endpoint.
#[derive(Deserialize)]
struct QuotableResponse {
    content: String,
    #[serde(default)]
    author: Option<String>,
}

fn parse_quote(body: &str) -> Result<Quote, serde_json::Error> {
    let parsed: QuotableResponse = serde_json::from_str(body)?;
    Ok(Quote {
        content: parsed.content,
        author: parsed.author.filter(|a| !a.trim().is_empty()),
    })
}

impl QuoteSource for HttpQuoteSource {
    fn random_quote(&self) -> QuoteFuture<'_> {
        Box::pin(async move {
            let url = self.url.clone();
            tracing::debug!(%url, "requesting random quote");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Transport {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url,
                    status: status.as_u16(),
                });
            }

            let body = response.text().await.map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

            parse_quote(&body).map_err(|e| FetchError::Decode {
                url,
                message: e.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotable_payload() {
        let body =
            r#"{"_id":"x","content":"Well begun is half done.","author":"Aristotle","tags":[]}"#;
        let quote = parse_quote(body).unwrap();
        assert_eq!(quote.content, "Well begun is half done.");
        assert_eq!(quote.author.as_deref(), Some("Aristotle"));
    }

    #[test]
    fn blank_author_is_dropped() {
        let quote = parse_quote(r#"{"content":"Keep going.","author":"  "}"#).unwrap();
        assert_eq!(quote.author, None);
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let source = HttpQuoteSource::new("http://127.0.0.1:9/random", Duration::from_secs(2));
        let err = source.random_quote().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
