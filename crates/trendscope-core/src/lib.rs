//! Shared domain types and configuration for Trendscope.

pub mod app_config;
pub mod config;
pub mod model;

pub use app_config::{AppConfig, LiveSourceConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use model::{
    AverageSentiment, Engagement, Insights, ParseEnumError, Sentiment, Source, SourceBreakdown,
    TrendItem,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
