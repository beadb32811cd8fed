//! Web search port returning related topics for a free-text query.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::quotes::FetchError;

/// Boxed future type alias used by [`SearchSource`].
pub type SearchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<RelatedTopic>, FetchError>> + Send + 'a>>;

/// One entry of the service's related-topics list.
///
/// Grouping entries carry no text; consumers skip them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTopic {
    /// Display text, if the entry is a plain result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// External link for the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Runs related-topic searches against an external service.
pub trait SearchSource: Send + Sync {
    /// Requests topics related to `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    fn related_topics(&self, query: &str) -> SearchFuture<'_>;
}
