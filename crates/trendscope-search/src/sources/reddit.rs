//! Reddit public search collector.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use trendscope_core::{LiveSourceConfig, TrendItem};

use crate::error::SearchError;

use super::reddit_helpers::to_trend_item;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Reddit search listing wrapper.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Post {
    pub(super) data: PostData,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PostData {
    pub(super) title: Option<String>,
    pub(super) selftext: Option<String>,
    pub(super) subreddit_name_prefixed: Option<String>,
    pub(super) score: Option<i64>,
    pub(super) controversial: Option<bool>,
    pub(super) num_comments: Option<u64>,
    pub(super) permalink: Option<String>,
    pub(super) created_utc: Option<f64>,
    pub(super) author: Option<String>,
}

/// Client for the unauthenticated `search.json` endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    /// Build a client from the live-source settings.
    ///
    /// A `timeout_secs` of `0` leaves requests without a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &LiveSourceConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search Reddit for `topic` and map each post into a [`TrendItem`].
    ///
    /// Never fails: a non-success status, transport error, or malformed body
    /// is logged and yields an empty `Vec`. A blank topic returns an empty
    /// `Vec` without issuing a request.
    pub async fn fetch_live(&self, topic: &str) -> Vec<TrendItem> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Vec::new();
        }

        match self.try_fetch(topic).await {
            Ok(items) => {
                tracing::debug!(topic, count = items.len(), "collected Reddit items");
                items
            }
            Err(e) => {
                tracing::warn!(
                    topic,
                    source = "reddit",
                    error = %e,
                    "Reddit search failed; continuing without live results"
                );
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, topic: &str) -> Result<Vec<TrendItem>, SearchError> {
        let url = self.search_url(topic);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Reddit(format!(
                "search failed with status {status}"
            )));
        }

        let body = response.bytes().await?;
        let listing: Listing =
            serde_json::from_slice(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={topic})"),
                source: e,
            })?;

        Ok(listing.data.children.iter().map(to_trend_item).collect())
    }

    /// `{base}/search.json?q="<topic>"` with the topic escaped like a URI component.
    fn search_url(&self, topic: &str) -> String {
        let encoded = utf8_percent_encode(topic, URI_COMPONENT);
        format!("{}/search.json?q=\"{encoded}\"", self.base_url)
    }
}
