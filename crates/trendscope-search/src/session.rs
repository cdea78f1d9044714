//! Stateful search session: latest results plus the active filters.

use rand::rngs::StdRng;
use rand::Rng;
use trendscope_core::{AppConfig, Sentiment, Source, TrendItem};

use crate::error::SearchError;
use crate::filter::FilterState;
use crate::pipeline::TrendSearch;
use crate::types::SearchResults;

/// Holds the current merged collection and filter selections.
///
/// `search` borrows the session mutably, so a session never has two searches
/// in flight. Results are replaced only once a search completes; a failed or
/// abandoned search leaves the previous results in place.
pub struct TrendSession<R = StdRng> {
    engine: TrendSearch<R>,
    results: Option<SearchResults>,
    filters: FilterState,
}

impl TrendSession<StdRng> {
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SearchError> {
        Ok(Self::new(TrendSearch::from_config(config)?))
    }
}

impl<R: Rng> TrendSession<R> {
    pub fn new(engine: TrendSearch<R>) -> Self {
        Self {
            engine,
            results: None,
            filters: FilterState::default(),
        }
    }

    /// Run a search and make its results current.
    ///
    /// Filter selections carry over from earlier searches.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError::Orchestration`]; previous results are kept.
    pub async fn search(&mut self, topic: &str) -> Result<&SearchResults, SearchError> {
        match self.engine.search(topic).await {
            Ok(results) => Ok(&*self.results.insert(results)),
            Err(e) => {
                tracing::error!(topic, error = %e, "search failed");
                Err(e)
            }
        }
    }

    /// Returns `false` and keeps the current selection if `sources` is empty.
    pub fn set_sources<I>(&mut self, sources: I) -> bool
    where
        I: IntoIterator<Item = Source>,
    {
        self.filters.set_sources(sources)
    }

    /// Returns `false` and keeps the current selection if `sentiments` is empty.
    pub fn set_sentiments<I>(&mut self, sentiments: I) -> bool
    where
        I: IntoIterator<Item = Sentiment>,
    {
        self.filters.set_sentiments(sentiments)
    }

    #[must_use]
    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Current results narrowed by the current selections.
    ///
    /// Derived on every call, so it always reflects the latest search and
    /// the latest filter change. Empty before the first search.
    #[must_use]
    pub fn filtered(&self) -> Vec<&TrendItem> {
        self.results
            .as_ref()
            .map(|results| self.filters.apply(&results.items))
            .unwrap_or_default()
    }
}
