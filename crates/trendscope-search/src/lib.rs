//! Trend search pipeline for Trendscope.
//!
//! Fetches live discussion items from Reddit, fills in YouTube and Twitter
//! with synthetic placeholders, merges both into one collection, and derives
//! insights. A [`TrendSession`] adds source/sentiment filtering on top.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod generator;
pub mod insights;
pub mod pipeline;
pub mod session;
pub mod types;

mod sources;

pub use catalog::top_keywords;
pub use error::SearchError;
pub use filter::{FilterState, Selection};
pub use generator::generate;
pub use insights::{average_sentiment, compute_insights, SentimentCounts};
pub use pipeline::{merge, TrendSearch, LIVE_SOURCE};
pub use session::TrendSession;
pub use sources::{classify_post, RedditClient};
pub use types::SearchResults;
