//! Placeholder trend items for platforms without a live integration.
//!
//! All randomness comes from the caller's RNG, so a seeded `StdRng` yields
//! the same batch every time (ids included).

use std::cmp::Reverse;
use std::ops::Range;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use trendscope_core::{Engagement, Sentiment, Source, TrendItem};

use crate::catalog::{
    authors, content_pool, normalize_topic, render_title, template_uses_prefix, title_prefixes,
    TITLE_TEMPLATE_COUNT,
};

/// Items per batch, drawn uniformly (upper bound exclusive).
pub const BATCH_SIZE: Range<usize> = 15..25;

const MAX_LIKES: i64 = 10_000;
const MAX_COMMENTS: u64 = 2_000;
const WINDOW_DAYS: i64 = 30;

/// Generate a batch of synthetic items for `topic`.
///
/// Sources and sentiments are drawn uniformly for every item. The batch is
/// returned sorted by descending total engagement. A blank topic yields an
/// empty batch.
pub fn generate<R: Rng + ?Sized>(topic: &str, rng: &mut R, now: DateTime<Utc>) -> Vec<TrendItem> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Vec::new();
    }

    let key = normalize_topic(topic);
    let count = rng.random_range(BATCH_SIZE);

    let mut items: Vec<TrendItem> = (0..count)
        .map(|_| synthesize_item(topic, &key, rng, now))
        .collect();

    // Stable, so ties keep generation order.
    items.sort_by_key(|item| Reverse(item.engagement.total()));

    tracing::debug!(topic, count = items.len(), "generated synthetic items");
    items
}

fn synthesize_item<R: Rng + ?Sized>(
    topic: &str,
    key: &str,
    rng: &mut R,
    now: DateTime<Utc>,
) -> TrendItem {
    let source = *pick(rng, &Source::ALL);
    let sentiment = *pick(rng, &Sentiment::ALL);
    let id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();

    TrendItem {
        id,
        title: synthesize_title(topic, source, sentiment, rng),
        content: (*pick(rng, content_pool(key, sentiment))).to_string(),
        source,
        sentiment,
        engagement: Engagement {
            likes: rng.random_range(0..MAX_LIKES),
            comments: rng.random_range(0..MAX_COMMENTS),
        },
        url: format!("https://example.com/{source}/{id}"),
        date: random_instant(rng, now),
        author: (*pick(rng, authors(source))).to_string(),
    }
}

fn synthesize_title<R: Rng + ?Sized>(
    topic: &str,
    source: Source,
    sentiment: Sentiment,
    rng: &mut R,
) -> String {
    let template = rng.random_range(0..TITLE_TEMPLATE_COUNT);
    let prefix = if template_uses_prefix(source, template) {
        *pick(rng, title_prefixes(sentiment))
    } else {
        ""
    };
    render_title(source, template, topic, prefix)
}

/// Uniform instant in the trailing window ending at `now`.
fn random_instant<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let window_ms = Duration::days(WINDOW_DAYS).num_milliseconds();
    now - Duration::milliseconds(rng.random_range(0..=window_ms))
}

/// Uniform choice from a static, non-empty table.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
