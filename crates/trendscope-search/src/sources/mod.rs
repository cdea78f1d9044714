//! Live data sources.
//!
//! Each source degrades to an empty result on failure so an outage never
//! blocks the rest of the search.

mod reddit;
mod reddit_helpers;

pub use reddit::RedditClient;
pub use reddit_helpers::classify_post;
