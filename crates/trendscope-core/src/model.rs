//! Trend entity model shared by every stage of the search pipeline.
//!
//! A [`TrendItem`] is built once and never edited. Collections of items are
//! replaced wholesale on each search and handed out only as shared slices.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Platform a trend item was collected from (or synthesized for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Youtube,
    Reddit,
    Twitter,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Youtube, Source::Reddit, Source::Twitter];

    /// Lowercase identifier, as used in URLs and on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Youtube => "youtube",
            Source::Reddit => "reddit",
            Source::Twitter => "twitter",
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Source::Youtube => "YouTube",
            Source::Reddit => "Reddit",
            Source::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youtube" => Ok(Source::Youtube),
            "reddit" => Ok(Source::Reddit),
            "twitter" => Ok(Source::Twitter),
            _ => Err(ParseEnumError {
                kind: "source",
                value: s.to_string(),
            }),
        }
    }
}

/// Coarse sentiment label attached to an item at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ParseEnumError {
                kind: "sentiment",
                value: s.to_string(),
            }),
        }
    }
}

/// Returned when a string does not name a known [`Source`] or [`Sentiment`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Approval and discussion counts for one item.
///
/// `likes` is signed because live Reddit scores are passed through unclamped
/// and can go below zero. Synthetic items always carry non-negative likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: i64,
    pub comments: u64,
}

impl Engagement {
    /// Likes plus comments.
    #[must_use]
    pub fn total(self) -> i64 {
        self.likes
            .saturating_add(i64::try_from(self.comments).unwrap_or(i64::MAX))
    }
}

/// One discussion item, live or synthetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub source: Source,
    pub sentiment: Sentiment,
    pub engagement: Engagement,
    pub url: String,
    /// Serialized as an RFC 3339 instant.
    pub date: DateTime<Utc>,
    pub author: String,
}

/// Dominant sentiment across a merged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AverageSentiment {
    #[serde(rename = "Mostly Positive")]
    MostlyPositive,
    #[serde(rename = "Mostly Negative")]
    MostlyNegative,
    #[serde(rename = "Mostly Neutral")]
    MostlyNeutral,
    Mixed,
    /// Only produced for an empty collection.
    Neutral,
}

impl AverageSentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AverageSentiment::MostlyPositive => "Mostly Positive",
            AverageSentiment::MostlyNegative => "Mostly Negative",
            AverageSentiment::MostlyNeutral => "Mostly Neutral",
            AverageSentiment::Mixed => "Mixed",
            AverageSentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for AverageSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-platform item counts over the merged (unfiltered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub youtube: usize,
    pub reddit: usize,
    pub twitter: usize,
}

impl SourceBreakdown {
    #[must_use]
    pub fn get(&self, source: Source) -> usize {
        match source {
            Source::Youtube => self.youtube,
            Source::Reddit => self.reddit,
            Source::Twitter => self.twitter,
        }
    }

    pub fn record(&mut self, source: Source) {
        match source {
            Source::Youtube => self.youtube += 1,
            Source::Reddit => self.reddit += 1,
            Source::Twitter => self.twitter += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.youtube + self.reddit + self.twitter
    }

    /// Fraction of all items that came from `source`. `0.0` when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, source: Source) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(source) as f64 / total as f64
    }
}

/// Aggregate statistics for one search, recomputed on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub top_keywords: Vec<String>,
    pub total_engagement: i64,
    pub average_sentiment: AverageSentiment,
    pub sources_breakdown: SourceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_parses_case_insensitively() {
        assert_eq!("YouTube".parse::<Source>().unwrap(), Source::Youtube);
        assert_eq!(" reddit ".parse::<Source>().unwrap(), Source::Reddit);
        assert!("myspace".parse::<Source>().is_err());
    }

    #[test]
    fn sentiment_parse_error_names_the_kind() {
        let err = "angry".parse::<Sentiment>().unwrap_err();
        assert_eq!(err.kind, "sentiment");
        assert_eq!(err.to_string(), "unknown sentiment: \"angry\"");
    }

    #[test]
    fn engagement_total_handles_negative_likes() {
        let e = Engagement {
            likes: -12,
            comments: 40,
        };
        assert_eq!(e.total(), 28);
    }

    #[test]
    fn trend_item_serializes_lowercase_enums_and_iso_date() {
        let item = TrendItem {
            id: Uuid::nil(),
            title: "t".to_string(),
            content: "c".to_string(),
            source: Source::Twitter,
            sentiment: Sentiment::Negative,
            engagement: Engagement {
                likes: 3,
                comments: 4,
            },
            url: "https://example.com".to_string(),
            date: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            author: "@someone".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["source"], "twitter");
        assert_eq!(json["sentiment"], "negative");
        assert_eq!(json["date"], "2023-11-14T22:13:20Z");
        assert_eq!(json["engagement"]["comments"], 4);
    }

    #[test]
    fn average_sentiment_serializes_display_labels() {
        let json = serde_json::to_value(AverageSentiment::MostlyPositive).unwrap();
        assert_eq!(json, "Mostly Positive");
        assert_eq!(AverageSentiment::Mixed.to_string(), "Mixed");
    }

    #[test]
    fn breakdown_share_is_zero_when_empty() {
        let b = SourceBreakdown::default();
        assert_eq!(b.share(Source::Reddit), 0.0);
    }

    #[test]
    fn breakdown_records_and_shares() {
        let mut b = SourceBreakdown::default();
        b.record(Source::Reddit);
        b.record(Source::Reddit);
        b.record(Source::Twitter);
        b.record(Source::Youtube);
        assert_eq!(b.get(Source::Reddit), 2);
        assert_eq!(b.total(), 4);
        assert!((b.share(Source::Reddit) - 0.5).abs() < f64::EPSILON);
    }
}
