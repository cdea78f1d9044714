//! Plain-text rendering of insights and trend cards.

use std::fmt::Write as _;

use trendscope_core::{Insights, Source, TrendItem};

const CONTENT_PREVIEW_CHARS: usize = 200;

/// Format an integer with thousands separators, e.g. `-1,234,567`.
pub(crate) fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

pub(crate) fn render_insights(query: &str, insights: &Insights) -> String {
    let breakdown = &insights.sources_breakdown;
    let sources = Source::ALL
        .iter()
        .map(|source| {
            format!(
                "{} {} ({:.0}%)",
                source.label(),
                breakdown.get(*source),
                breakdown.share(*source) * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut out = String::new();
    let _ = writeln!(out, "Insights for \"{query}\"");
    let _ = writeln!(out, "  Top keywords:  {}", insights.top_keywords.join(", "));
    let _ = writeln!(
        out,
        "  Engagement:    {}",
        format_count(insights.total_engagement)
    );
    let _ = writeln!(out, "  Sentiment:     {}", insights.average_sentiment);
    let _ = writeln!(out, "  Sources:       {sources}");
    out
}

pub(crate) fn render_card(item: &TrendItem) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] [{}] {}",
        item.source.label(),
        item.sentiment.label(),
        item.title
    );
    let _ = writeln!(
        out,
        "  {}",
        truncate_chars(&item.content, CONTENT_PREVIEW_CHARS)
    );
    let _ = writeln!(
        out,
        "  {} - {}   likes {}  comments {}",
        item.author,
        item.date.format("%Y-%m-%d"),
        format_count(item.engagement.likes),
        format_count(i64::try_from(item.engagement.comments).unwrap_or(i64::MAX))
    );
    let _ = writeln!(out, "  {}", item.url);
    out
}

/// Render up to `limit` cards followed by a count of the ones left out.
pub(crate) fn render_cards(items: &[&TrendItem], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(items.len()).min(items.len());
    let mut out = format!("Showing {} results\n", items.len());
    for item in &items[..shown] {
        out.push('\n');
        out.push_str(&render_card(item));
    }
    if items.len() > shown {
        let _ = writeln!(out, "\n{} more results not shown...", items.len() - shown);
    }
    out
}

#[cfg(test)]
mod tests {
    use trendscope_core::{AverageSentiment, Engagement, Sentiment, SourceBreakdown};

    use super::*;

    fn sample_item(title: &str) -> TrendItem {
        TrendItem {
            id: "00000000-0000-4000-8000-000000000001".parse().unwrap(),
            title: title.to_string(),
            content: "x".repeat(250),
            source: Source::Youtube,
            sentiment: Sentiment::Positive,
            engagement: Engagement {
                likes: 12_345,
                comments: 6,
            },
            url: "https://example.com/youtube/1".to_string(),
            date: "2025-03-04T05:06:07Z".parse().unwrap(),
            author: "TechReviewer".to_string(),
        }
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-42_000), "-42,000");
    }

    #[test]
    fn card_shows_badges_truncated_content_and_counts() {
        let card = render_card(&sample_item("Big news"));
        assert!(card.starts_with("[YouTube] [Positive] Big news\n"));
        assert!(card.contains(&format!("{}...", "x".repeat(200))));
        assert!(card.contains("TechReviewer - 2025-03-04"));
        assert!(card.contains("likes 12,345  comments 6"));
    }

    #[test]
    fn insights_list_every_platform_share() {
        let insights = Insights {
            top_keywords: vec!["bias".to_string(), "privacy".to_string()],
            total_engagement: 10_500,
            average_sentiment: AverageSentiment::Mixed,
            sources_breakdown: SourceBreakdown {
                youtube: 1,
                reddit: 2,
                twitter: 1,
            },
        };
        let text = render_insights("ai ethics", &insights);
        assert!(text.contains("Insights for \"ai ethics\""));
        assert!(text.contains("bias, privacy"));
        assert!(text.contains("10,500"));
        assert!(text.contains("Mixed"));
        assert!(text.contains("YouTube 1 (25%) | Reddit 2 (50%) | Twitter 1 (25%)"));
    }

    #[test]
    fn cards_respect_limit_and_report_remainder() {
        let a = sample_item("a");
        let b = sample_item("b");
        let c = sample_item("c");
        let text = render_cards(&[&a, &b, &c], Some(2));
        assert!(text.starts_with("Showing 3 results\n"));
        assert!(text.contains("] a\n"));
        assert!(text.contains("] b\n"));
        assert!(!text.contains("] c\n"));
        assert!(text.contains("1 more results not shown..."));
    }

    #[test]
    fn cards_without_limit_show_everything() {
        let a = sample_item("a");
        let text = render_cards(&[&a], None);
        assert!(!text.contains("not shown"));
    }
}
