//! Recording adapter for the `SearchSource` port.

use std::sync::Arc;

use serde_json::json;

use super::{record_result, SharedRecorder};
use crate::ports::search::{SearchFuture, SearchSource};

/// Records searches while delegating to an inner source.
pub struct RecordingSearchSource {
    inner: Box<dyn SearchSource>,
    recorder: SharedRecorder,
}

impl RecordingSearchSource {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn SearchSource>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl SearchSource for RecordingSearchSource {
    fn related_topics(&self, query: &str) -> SearchFuture<'_> {
        let query = query.to_string();
        let recorder = Arc::clone(&self.recorder);
        Box::pin(async move {
            let result = self.inner.related_topics(&query).await;
            let input = json!({ "query": query });
            record_result(&recorder, "search", "related_topics", &input, &result);
            result
        })
    }
}
