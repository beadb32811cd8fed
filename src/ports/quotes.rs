//! Quote service port.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure talking to an HTTP collaborator (quote or search service).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Endpoint that was called.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The body was not the expected JSON shape.
    #[error("unexpected response from {url}: {message}")]
    Decode {
        /// Endpoint that was called.
        url: String,
        /// Decoder error description.
        message: String,
    },
    /// Error carried through a recorded cassette.
    #[error("{0}")]
    Replayed(String),
}

/// Boxed future type alias used by [`QuoteSource`] to keep the trait dyn-compatible.
pub type QuoteFuture<'a> = Pin<Box<dyn Future<Output = Result<Quote, FetchError>> + Send + 'a>>;

/// A motivational quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub content: String,
    /// Who said it, when the service knows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Fetches random quotes from an external service.
pub trait QuoteSource: Send + Sync {
    /// Requests one random quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    fn random_quote(&self) -> QuoteFuture<'_>;
}
