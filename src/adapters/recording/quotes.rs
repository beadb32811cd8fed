//! Recording adapter for the `QuoteSource` port.

use std::sync::Arc;

use super::{record_result, SharedRecorder};
use crate::ports::quotes::{QuoteFuture, QuoteSource};

/// Records quote fetches while delegating to an inner source.
pub struct RecordingQuoteSource {
    inner: Box<dyn QuoteSource>,
    recorder: SharedRecorder,
}

impl RecordingQuoteSource {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn QuoteSource>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl QuoteSource for RecordingQuoteSource {
    fn random_quote(&self) -> QuoteFuture<'_> {
        let recorder = Arc::clone(&self.recorder);
        Box::pin(async move {
            let result = self.inner.random_quote().await;
            record_result(&recorder, "quotes", "random_quote", &(), &result);
            result
        })
    }
}
