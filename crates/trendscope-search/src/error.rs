use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The live endpoint answered with a non-success status.
    #[error("Reddit API error: {0}")]
    Reddit(String),

    /// The response body did not match the listing shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The live fetch task panicked or was cancelled before completing.
    #[error("search orchestration failed: {0}")]
    Orchestration(#[from] tokio::task::JoinError),
}
