//! One-shot `search` command.

use anyhow::Context;
use trendscope_core::{AppConfig, Sentiment, Source};
use trendscope_search::TrendSession;

use crate::render::{render_cards, render_insights};

#[derive(Debug, Default)]
pub(crate) struct SearchOptions {
    /// Empty means every platform.
    pub(crate) sources: Vec<Source>,
    /// Empty means every sentiment.
    pub(crate) sentiments: Vec<Sentiment>,
    pub(crate) limit: Option<usize>,
    pub(crate) json: bool,
}

/// Run one search and print the filtered results.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the search
/// orchestration fails. Live-source outages are not errors.
pub(crate) async fn run_search(
    config: &AppConfig,
    topic: &str,
    options: &SearchOptions,
) -> anyhow::Result<()> {
    let mut session = TrendSession::from_config(config)?;
    if !options.sources.is_empty() {
        session.set_sources(options.sources.iter().copied());
    }
    if !options.sentiments.is_empty() {
        session.set_sentiments(options.sentiments.iter().copied());
    }

    session
        .search(topic)
        .await
        .context("an error occurred while searching; please try again")?;

    let Some(results) = session.results() else {
        return Ok(());
    };
    let filtered = session.filtered();

    if options.json {
        let shown: Vec<_> = filtered
            .iter()
            .take(options.limit.unwrap_or(usize::MAX))
            .collect();
        let payload = serde_json::json!({
            "query": results.query,
            "insights": results.insights,
            "total_results": results.items.len(),
            "matching_results": filtered.len(),
            "items": shown,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print!("{}", render_insights(&results.query, &results.insights));
    println!();
    print!("{}", render_cards(&filtered, options.limit));
    println!();
    println!(
        "Found {} results for \"{}\"",
        results.items.len(),
        results.query
    );
    Ok(())
}
