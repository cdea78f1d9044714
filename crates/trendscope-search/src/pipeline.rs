//! Search orchestration: live fetch, synthetic fill-in, merge, insights.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::AbortHandle;
use trendscope_core::{AppConfig, Source, TrendItem};

use crate::error::SearchError;
use crate::generator::generate;
use crate::sources::RedditClient;
use crate::types::SearchResults;

/// The platform served by the live adapter. Synthetic items never use it.
pub const LIVE_SOURCE: Source = Source::Reddit;

/// Runs searches against the live source plus the synthetic generator.
pub struct TrendSearch<R = StdRng> {
    live: RedditClient,
    rng: R,
}

impl TrendSearch<StdRng> {
    /// Build a search engine from application config.
    ///
    /// Uses `config.seed` for the generator when set, otherwise seeds from
    /// the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        let live = RedditClient::new(&config.live_source())?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::new(live, rng))
    }
}

impl<R: Rng> TrendSearch<R> {
    pub fn new(live: RedditClient, rng: R) -> Self {
        Self { live, rng }
    }

    /// Run one search for `topic`.
    ///
    /// The live fetch runs on its own task while the generator fills in the
    /// other platforms. Live failures degrade to zero live items and are not
    /// reported here. A blank topic returns empty results without any I/O.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Orchestration`] if the live fetch task panics
    /// or is cancelled.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime. Dropping the returned
    /// future aborts the in-flight live fetch.
    pub async fn search(&mut self, topic: &str) -> Result<SearchResults, SearchError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Ok(SearchResults::empty(topic));
        }

        let live_task = {
            let client = self.live.clone();
            let owned = topic.to_string();
            tokio::spawn(async move { client.fetch_live(&owned).await })
        };

        let _abort = AbortOnDrop(live_task.abort_handle());

        let synthetic = generate(topic, &mut self.rng, Utc::now());
        let live = live_task.await?;

        let live_count = live.len();
        let items = merge(live, synthetic);
        tracing::info!(
            topic,
            live = live_count,
            total = items.len(),
            "search complete"
        );

        Ok(SearchResults::from_items(topic, items))
    }
}

/// Aborts the wrapped task when dropped. A no-op once the task has finished.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Live items first, then synthetic items for every other platform.
///
/// No re-sorting happens here; each input keeps its own order.
#[must_use]
pub fn merge(live: Vec<TrendItem>, synthetic: Vec<TrendItem>) -> Vec<TrendItem> {
    let mut items = live;
    items.extend(
        synthetic
            .into_iter()
            .filter(|item| item.source != LIVE_SOURCE),
    );
    items
}
