//! Related-topic search with a loading flag.

use crate::ports::{FetchError, RelatedTopic, SearchSource};

/// One displayable search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Result text.
    pub text: String,
    /// Link to open, when the service gave one.
    pub url: Option<String>,
}

/// Search state backed by a [`SearchSource`].
///
/// [`SearchView::search`] runs a whole request. Hosts that render while the
/// request is in flight call [`SearchView::begin`], send
/// [`SearchView::query`] themselves, then hand the outcome to
/// [`SearchView::finish`].
pub struct SearchView<'a> {
    source: &'a dyn SearchSource,
    query: String,
    results: Vec<SearchHit>,
    loading: bool,
}

impl<'a> SearchView<'a> {
    /// Creates an idle view with no results.
    pub fn new(source: &'a dyn SearchSource) -> Self {
        Self {
            source,
            query: String::new(),
            results: Vec::new(),
            loading: false,
        }
    }

    /// Last query that was sent.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the last search.
    #[must_use]
    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Runs a search for `query`.
    ///
    /// A blank query sends nothing and leaves the view untouched. Entries
    /// with missing or empty text are dropped.
    ///
    /// # Errors
    ///
    /// Returns the fetch error after the results have been cleared.
    pub async fn search(&mut self, query: &str) -> Result<(), FetchError> {
        if !self.begin(query) {
            return Ok(());
        }
        let source = self.source;
        let outcome = source.related_topics(&self.query).await;
        self.finish(outcome)
    }

    /// Records the trimmed `query` and marks a request as in flight.
    ///
    /// Returns `false`, changing nothing, if the query is blank.
    pub fn begin(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        query.clone_into(&mut self.query);
        self.loading = true;
        true
    }

    /// Applies the outcome of the request started by [`SearchView::begin`].
    ///
    /// # Errors
    ///
    /// Returns the fetch error after the results have been cleared.
    pub fn finish(
        &mut self,
        outcome: Result<Vec<RelatedTopic>, FetchError>,
    ) -> Result<(), FetchError> {
        self.loading = false;
        match outcome {
            Ok(topics) => {
                self.results = topics.into_iter().filter_map(hit).collect();
                tracing::debug!(query = %self.query, hits = self.results.len(), "search finished");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("search for {:?} failed: {e}", self.query);
                self.results.clear();
                Err(e)
            }
        }
    }
}

/// Turns a topic into a hit; topics with missing or empty text have none.
fn hit(topic: RelatedTopic) -> Option<SearchHit> {
    let text = topic.text.filter(|text| !text.is_empty())?;
    Some(SearchHit {
        text,
        url: topic.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::OfflineService;
    use crate::adapters::replaying::ReplayingSearchSource;
    use crate::cassette::format::Cassette;
    use crate::cassette::replayer::CassetteReplayer;

    const CASSETTE: &str = r#"
name: search
recorded_at: 2026-03-01T08:00:00Z
interactions:
  - seq: 0
    port: search
    method: related_topics
    input: {query: "photosynthesis"}
    output:
      Ok:
        - {text: "Photosynthesis - process used by plants", url: "https://duckduckgo.com/Photosynthesis"}
        - {url: "https://duckduckgo.com/c/Biology"}
        - {text: ""}
        - {text: "Chlorophyll - green pigment"}
  - seq: 1
    port: search
    method: related_topics
    input: {query: "osmosis"}
    output: {Err: "request to https://api.duckduckgo.com/ failed: timeout"}
"#;

    fn replayed() -> ReplayingSearchSource {
        let cassette = Cassette::from_yaml(CASSETTE).unwrap();
        ReplayingSearchSource::new(CassetteReplayer::new(&cassette))
    }

    fn topic(text: Option<&str>) -> RelatedTopic {
        RelatedTopic {
            text: text.map(str::to_string),
            url: None,
        }
    }

    #[tokio::test]
    async fn keeps_only_entries_with_text() {
        let source = replayed();
        let mut view = SearchView::new(&source);

        view.search("  photosynthesis ").await.unwrap();

        assert_eq!(view.query(), "photosynthesis");
        assert!(!view.is_loading());
        let expected = [
            SearchHit {
                text: "Photosynthesis - process used by plants".into(),
                url: Some("https://duckduckgo.com/Photosynthesis".into()),
            },
            SearchHit {
                text: "Chlorophyll - green pigment".into(),
                url: None,
            },
        ];
        assert_eq!(view.results(), expected);
    }

    #[tokio::test]
    async fn failure_clears_previous_results() {
        let source = replayed();
        let mut view = SearchView::new(&source);
        view.search("photosynthesis").await.unwrap();

        assert!(view.search("osmosis").await.is_err());

        assert!(view.results().is_empty());
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn blank_query_sends_nothing() {
        // The offline source would fail any request that reached it.
        let mut view = SearchView::new(&OfflineService);

        view.search("   ").await.unwrap();

        assert_eq!(view.query(), "");
        assert!(view.results().is_empty());
    }

    #[test]
    fn loading_until_the_outcome_arrives() {
        let mut view = SearchView::new(&OfflineService);
        assert!(!view.is_loading());

        assert!(view.begin(" osmosis "));
        assert!(view.is_loading());
        assert_eq!(view.query(), "osmosis");

        let err = FetchError::Replayed("timeout".into());
        assert!(view.finish(Err(err)).is_err());
        assert!(!view.is_loading());
    }

    #[test]
    fn blank_begin_is_not_loading() {
        let mut view = SearchView::new(&OfflineService);
        assert!(!view.begin("  "));
        assert!(!view.is_loading());
    }

    #[test]
    fn whitespace_text_is_kept() {
        let mut view = SearchView::new(&OfflineService);
        view.begin("rust");

        let topics = vec![topic(Some("")), topic(None), topic(Some(" "))];
        view.finish(Ok(topics)).unwrap();

        assert_eq!(view.results().len(), 1);
        assert_eq!(view.results()[0].text, " ");
    }
}
