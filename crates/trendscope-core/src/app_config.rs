#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub live_base_url: String,
    pub user_agent: String,
    /// `0` disables the request timeout.
    pub live_timeout_secs: u64,
    pub log_level: String,
    /// Fixed seed for the synthetic generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Settings handed to the live source adapter.
    #[must_use]
    pub fn live_source(&self) -> LiveSourceConfig {
        LiveSourceConfig {
            base_url: self.live_base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.live_timeout_secs,
        }
    }
}

/// Connection settings for the live search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSourceConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}
