//! Reddit post conversion: sentiment heuristic, timestamps, and field mapping.

use chrono::{DateTime, Utc};
use trendscope_core::{Engagement, Sentiment, Source, TrendItem};
use uuid::Uuid;

use super::reddit::Post;

/// Score above which an uncontroversial post counts as positive.
const POSITIVE_SCORE_THRESHOLD: i64 = 10;

/// Classify a post from its score and controversy flag.
///
/// The positive test runs first; a high score with the controversial flag set
/// fails it and then lands on negative.
#[must_use]
pub fn classify_post(score: i64, controversial: bool) -> Sentiment {
    if score > POSITIVE_SCORE_THRESHOLD && !controversial {
        Sentiment::Positive
    } else if score < 0 || controversial {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Convert epoch seconds (possibly fractional) to a UTC instant.
///
/// Out-of-range or non-finite values fall back to the Unix epoch.
pub(super) fn epoch_to_utc(created_utc: f64) -> DateTime<Utc> {
    if !created_utc.is_finite() {
        return DateTime::<Utc>::default();
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = (created_utc * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

pub(super) fn to_trend_item(post: &Post) -> TrendItem {
    let data = &post.data;
    let title = data.title.clone().unwrap_or_default();
    let score = data.score.unwrap_or(0);

    let content = match data.selftext.as_deref() {
        Some(body) if !body.is_empty() => body.to_string(),
        _ => format!(
            "{}: {title}",
            data.subreddit_name_prefixed.as_deref().unwrap_or_default()
        ),
    };

    TrendItem {
        id: Uuid::new_v4(),
        content,
        source: Source::Reddit,
        sentiment: classify_post(score, data.controversial.unwrap_or(false)),
        engagement: Engagement {
            likes: score,
            comments: data.num_comments.unwrap_or(0),
        },
        url: format!(
            "https://reddit.com{}",
            data.permalink.as_deref().unwrap_or_default()
        ),
        date: epoch_to_utc(data.created_utc.unwrap_or(0.0)),
        author: data.author.clone().unwrap_or_default(),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::super::reddit::PostData;
    use super::*;

    fn post(data: PostData) -> Post {
        Post { data }
    }

    #[test]
    fn high_score_uncontroversial_is_positive() {
        assert_eq!(classify_post(15, false), Sentiment::Positive);
    }

    #[test]
    fn controversial_flag_overrides_high_score() {
        assert_eq!(classify_post(15, true), Sentiment::Negative);
    }

    #[test]
    fn negative_score_is_negative() {
        assert_eq!(classify_post(-3, false), Sentiment::Negative);
    }

    #[test]
    fn threshold_score_is_neutral() {
        assert_eq!(classify_post(10, false), Sentiment::Neutral);
        assert_eq!(classify_post(0, false), Sentiment::Neutral);
    }

    #[test]
    fn epoch_seconds_convert_to_utc() {
        let date = epoch_to_utc(1_700_000_000.0);
        assert_eq!(date.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn fractional_epoch_keeps_millis() {
        let date = epoch_to_utc(1_700_000_000.25);
        assert_eq!(date.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn non_finite_epoch_falls_back_to_unix_epoch() {
        assert_eq!(epoch_to_utc(f64::NAN).timestamp(), 0);
        assert_eq!(epoch_to_utc(f64::INFINITY).timestamp(), 0);
    }

    #[test]
    fn maps_all_fields_and_passes_negative_score_through() {
        let item = to_trend_item(&post(PostData {
            title: Some("Rust 2024 is out".to_string()),
            selftext: Some("Edition notes inside".to_string()),
            subreddit_name_prefixed: Some("r/rust".to_string()),
            score: Some(-7),
            controversial: Some(false),
            num_comments: Some(42),
            permalink: Some("/r/rust/comments/abc/rust_2024/".to_string()),
            created_utc: Some(1_700_000_000.0),
            author: Some("ferris".to_string()),
        }));

        assert_eq!(item.source, Source::Reddit);
        assert_eq!(item.sentiment, Sentiment::Negative);
        assert_eq!(item.engagement.likes, -7);
        assert_eq!(item.engagement.comments, 42);
        assert_eq!(item.title, "Rust 2024 is out");
        assert_eq!(item.content, "Edition notes inside");
        assert_eq!(item.url, "https://reddit.com/r/rust/comments/abc/rust_2024/");
        assert_eq!(item.author, "ferris");
        assert_eq!(item.date.timestamp(), 1_700_000_000);
    }

    #[test]
    fn empty_selftext_falls_back_to_subreddit_and_title() {
        let item = to_trend_item(&post(PostData {
            title: Some("Link post".to_string()),
            selftext: Some(String::new()),
            subreddit_name_prefixed: Some("r/technology".to_string()),
            ..PostData::default()
        }));
        assert_eq!(item.content, "r/technology: Link post");
        assert_eq!(item.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn ids_are_fresh_per_conversion() {
        let raw = post(PostData::default());
        assert_ne!(to_trend_item(&raw).id, to_trend_item(&raw).id);
    }
}
