//! Live adapter for the `SearchSource` port using the DuckDuckGo instant answer API.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::quotes::http_client;
use crate::ports::quotes::FetchError;
use crate::ports::search::{RelatedTopic, SearchFuture, SearchSource};

/// Default instant-answer endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://api.duckduckgo.com/";

/// Searches a DuckDuckGo-compatible instant answer endpoint.
pub struct HttpSearchSource {
    client: Client,
    url: String,
}

impl HttpSearchSource {
    /// Creates a source calling `url` with the given request timeout.
    #[must_use]
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            url: url.to_string(),
        }
    }
}

/// Top-level instant answer response; only the related topics are used.
#[derive(Deserialize)]
struct InstantAnswer {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<TopicEntry>,
}

/// A related-topic entry. Category groups carry `Topics` instead of `Text`.
#[derive(Deserialize)]
struct TopicEntry {
    #[serde(rename = "Text", default)]
    text: Option<String>,
    #[serde(rename = "FirstURL", default)]
    first_url: Option<String>,
}

fn parse_related_topics(body: &str) -> Result<Vec<RelatedTopic>, serde_json::Error> {
    let answer: InstantAnswer = serde_json::from_str(body)?;
    Ok(answer
        .related_topics
        .into_iter()
        .map(|entry| RelatedTopic {
            text: entry.text,
            url: entry.first_url,
        })
        .collect())
}

impl SearchSource for HttpSearchSource {
    fn related_topics(&self, query: &str) -> SearchFuture<'_> {
        let query = query.to_string();
        Box::pin(async move {
            let url = self.url.clone();
            tracing::debug!(%url, %query, "searching related topics");

            let params = [
                ("q", query.as_str()),
                ("format", "json"),
                ("no_html", "1"),
            ];
            let response = self
                .client
                .get(&url)
                .query(&params)
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

            // The endpoint labels its JSON as javascript, so decode from text.
            let body = response.text().await.map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

            parse_related_topics(&body).map_err(|e| FetchError::Decode {
                url,
                message: e.to_string(),
            })
        })
    }
}
