use serde::Serialize;
use trendscope_core::{Insights, TrendItem};

use crate::insights::compute_insights;

/// Merged collection and insights for one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Topic as submitted, trimmed.
    pub query: String,
    /// Live items first, then synthetic items for the other platforms.
    pub items: Vec<TrendItem>,
    pub insights: Insights,
}

impl SearchResults {
    /// Results for a topic with no items (blank query).
    #[must_use]
    pub fn empty(query: &str) -> Self {
        Self::from_items(query, Vec::new())
    }

    #[must_use]
    pub fn from_items(query: &str, items: Vec<TrendItem>) -> Self {
        let insights = compute_insights(query, &items);
        Self {
            query: query.to_string(),
            items,
            insights,
        }
    }
}
