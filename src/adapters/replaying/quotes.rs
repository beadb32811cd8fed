//! Replaying adapter for the `QuoteSource` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::quotes::{QuoteFuture, QuoteSource};

/// Serves recorded quote fetches from a cassette.
pub struct ReplayingQuoteSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingQuoteSource {
    /// Creates a replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl QuoteSource for ReplayingQuoteSource {
    fn random_quote(&self) -> QuoteFuture<'_> {
        let output = next_output(&self.replayer, "quotes", "random_quote");
        Box::pin(async move { replay_result(output, "quotes::random_quote") })
    }
}
