//! Aggregate statistics over a merged collection.

use trendscope_core::{AverageSentiment, Insights, Sentiment, SourceBreakdown, TrendItem};

use crate::catalog::top_keywords;

/// Per-label sentiment tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    #[must_use]
    pub fn tally(items: &[TrendItem]) -> Self {
        let mut counts = Self::default();
        for item in items {
            match item.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Neutral => counts.neutral += 1,
                Sentiment::Negative => counts.negative += 1,
            }
        }
        counts
    }

    /// Plurality vote. A label wins only if it strictly beats both others;
    /// any tie at the top is `Mixed`. An empty tally is `Neutral`.
    #[must_use]
    pub fn average(self) -> AverageSentiment {
        let Self {
            positive,
            neutral,
            negative,
        } = self;

        if positive + neutral + negative == 0 {
            AverageSentiment::Neutral
        } else if positive > neutral && positive > negative {
            AverageSentiment::MostlyPositive
        } else if negative > neutral && negative > positive {
            AverageSentiment::MostlyNegative
        } else if neutral > positive && neutral > negative {
            AverageSentiment::MostlyNeutral
        } else {
            AverageSentiment::Mixed
        }
    }
}

#[must_use]
pub fn average_sentiment(items: &[TrendItem]) -> AverageSentiment {
    SentimentCounts::tally(items).average()
}

/// Compute insights for `topic` over the full merged collection.
///
/// Keywords come from the topic table, not from item text.
#[must_use]
pub fn compute_insights(topic: &str, items: &[TrendItem]) -> Insights {
    let mut sources_breakdown = SourceBreakdown::default();
    let mut total_engagement: i64 = 0;
    for item in items {
        sources_breakdown.record(item.source);
        total_engagement = total_engagement.saturating_add(item.engagement.total());
    }

    Insights {
        top_keywords: top_keywords(topic)
            .iter()
            .map(|keyword| (*keyword).to_string())
            .collect(),
        total_engagement,
        average_sentiment: average_sentiment(items),
        sources_breakdown,
    }
}
