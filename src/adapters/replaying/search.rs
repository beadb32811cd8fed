//! Replaying adapter for the `SearchSource` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::search::{SearchFuture, SearchSource};

/// Serves recorded search results from a cassette.
///
/// The query is not matched against the recording; lanes replay in order.
pub struct ReplayingSearchSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingSearchSource {
    /// Creates a replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl SearchSource for ReplayingSearchSource {
    fn related_topics(&self, _query: &str) -> SearchFuture<'_> {
        let output = next_output(&self.replayer, "search", "related_topics");
        Box::pin(async move { replay_result(output, "search::related_topics") })
    }
}
