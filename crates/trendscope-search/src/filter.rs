//! Source and sentiment selection for the filtered view.
//!
//! Both selections are never empty. A replacement that would empty one is
//! dropped and the previous selection stays in effect.

use std::collections::BTreeSet;

use trendscope_core::{Sentiment, Source, TrendItem};

/// A non-empty set of selected values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T: Ord> {
    values: BTreeSet<T>,
}

impl<T: Ord + Copy> Selection<T> {
    /// Select every value in `all`.
    ///
    /// # Panics
    ///
    /// Panics if `all` is empty; callers pass the fixed enum tables.
    #[must_use]
    pub fn all(all: &[T]) -> Self {
        assert!(!all.is_empty(), "a selection needs at least one value");
        Self {
            values: all.iter().copied().collect(),
        }
    }

    /// Replace the selection. Returns `false`, leaving the current selection
    /// untouched, when `values` is empty.
    pub fn replace<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let next: BTreeSet<T> = values.into_iter().collect();
        if next.is_empty() {
            return false;
        }
        self.values = next;
        true
    }

    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.values.contains(&value)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Current source and sentiment selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    sources: Selection<Source>,
    sentiments: Selection<Sentiment>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sources: Selection::all(&Source::ALL),
            sentiments: Selection::all(&Sentiment::ALL),
        }
    }
}

impl FilterState {
    pub fn set_sources<I>(&mut self, sources: I) -> bool
    where
        I: IntoIterator<Item = Source>,
    {
        let applied = self.sources.replace(sources);
        if !applied {
            tracing::debug!("ignored empty source selection");
        }
        applied
    }

    pub fn set_sentiments<I>(&mut self, sentiments: I) -> bool
    where
        I: IntoIterator<Item = Sentiment>,
    {
        let applied = self.sentiments.replace(sentiments);
        if !applied {
            tracing::debug!("ignored empty sentiment selection");
        }
        applied
    }

    #[must_use]
    pub fn sources(&self) -> &Selection<Source> {
        &self.sources
    }

    #[must_use]
    pub fn sentiments(&self) -> &Selection<Sentiment> {
        &self.sentiments
    }

    #[must_use]
    pub fn matches(&self, item: &TrendItem) -> bool {
        self.sources.contains(item.source) && self.sentiments.contains(item.sentiment)
    }

    /// Items that pass both selections, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [TrendItem]) -> Vec<&'a TrendItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use trendscope_core::Engagement;
    use uuid::Uuid;

    use super::*;

    fn item(source: Source, sentiment: Sentiment, title: &str) -> TrendItem {
        TrendItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: String::new(),
            source,
            sentiment,
            engagement: Engagement::default(),
            url: String::new(),
            date: Utc::now(),
            author: String::new(),
        }
    }

    #[test]
    fn default_selects_everything() {
        let filters = FilterState::default();
        assert_eq!(filters.sources().len(), 3);
        assert_eq!(filters.sentiments().len(), 3);
    }

    #[test]
    fn empty_source_selection_keeps_previous() {
        let mut filters = FilterState::default();
        assert!(filters.set_sources([Source::Youtube, Source::Reddit]));
        assert!(!filters.set_sources([]));
        let selected: Vec<Source> = filters.sources().iter().collect();
        assert_eq!(selected, vec![Source::Youtube, Source::Reddit]);
    }

    #[test]
    fn empty_sentiment_selection_keeps_previous() {
        let mut filters = FilterState::default();
        assert!(filters.set_sentiments([Sentiment::Negative]));
        assert!(!filters.set_sentiments(Vec::new()));
        assert!(filters.sentiments().contains(Sentiment::Negative));
        assert_eq!(filters.sentiments().len(), 1);
    }

    #[test]
    fn duplicates_collapse() {
        let mut selection = Selection::all(&Source::ALL);
        assert!(selection.replace([Source::Twitter, Source::Twitter]));
        assert_eq!(selection.len(), 1);
        assert!(!selection.is_empty());
    }

    #[test]
    fn apply_requires_both_selections_and_keeps_order() {
        let items = vec![
            item(Source::Reddit, Sentiment::Positive, "a"),
            item(Source::Youtube, Sentiment::Positive, "b"),
            item(Source::Reddit, Sentiment::Negative, "c"),
            item(Source::Reddit, Sentiment::Positive, "d"),
        ];
        let mut filters = FilterState::default();
        filters.set_sources([Source::Reddit]);
        filters.set_sentiments([Sentiment::Positive]);

        let titles: Vec<&str> = filters
            .apply(&items)
            .into_iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "d"]);
        assert_eq!(items.len(), 4, "source collection is not mutated");
    }
}
