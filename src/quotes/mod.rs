//! Motivational quote with local fallbacks.

use crate::ports::{FetchError, QuoteSource};

/// Shown before the first quote arrives.
pub const LOADING_TEXT: &str = "Loading your motivation...";
/// Shown when the first fetch fails.
pub const INITIAL_FALLBACK: &str = "Stay motivated and keep pushing forward!";
/// Shown when a refresh fails.
pub const REFRESH_FALLBACK: &str = "Keep your spirit high!";

/// Quote display state backed by a [`QuoteSource`].
pub struct QuoteView<'a> {
    source: &'a dyn QuoteSource,
    text: String,
    author: Option<String>,
}

impl<'a> QuoteView<'a> {
    /// Creates a view showing [`LOADING_TEXT`].
    pub fn new(source: &'a dyn QuoteSource) -> Self {
        Self {
            source,
            text: LOADING_TEXT.to_string(),
            author: None,
        }
    }

    /// Text to display.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Author of the displayed quote, if known.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Fetches the first quote.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after [`INITIAL_FALLBACK`] has been applied.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        self.fetch(INITIAL_FALLBACK).await
    }

    /// Fetches another quote.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after [`REFRESH_FALLBACK`] has been applied.
    pub async fn refresh(&mut self) -> Result<(), FetchError> {
        self.fetch(REFRESH_FALLBACK).await
    }

    async fn fetch(&mut self, fallback: &str) -> Result<(), FetchError> {
        match self.source.random_quote().await {
            Ok(quote) => {
                self.text = quote.content;
                self.author = quote.author.filter(|a| !a.trim().is_empty());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("quote fetch failed: {e}");
                self.text = fallback.to_string();
                self.author = None;
                Err(e)
            }
        }
    }
}
