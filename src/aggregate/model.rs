use serde::Serialize;

use crate::Article;

/// Message reported when the fan-out itself breaks down.
pub const ALL_SOURCES_FAILED: &str = "Failed to fetch from all news sources";

/// Result of [`Aggregator::combined_news`](crate::Aggregator::combined_news).
///
/// Serializes to `{ "articles": [...] }` or `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CombinedNews {
    /// Merged articles, newest first. Empty when every source failed.
    Articles {
        articles: Vec<Article>,
        /// Failure markers of the sources that were degraded.
        #[serde(skip_serializing)]
        errors: Vec<String>,
    },
    /// The aggregation itself failed.
    Failed { error: String },
}

impl CombinedNews {
    /// The merged articles; empty for [`CombinedNews::Failed`].
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        match self {
            Self::Articles { articles, .. } => articles,
            Self::Failed { .. } => &[],
        }
    }
}

/// Result of [`Aggregator::search_news`](crate::Aggregator::search_news).
///
/// Serializes with a `status` tag of `"success"` or `"error"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchNews {
    Success {
        articles: Vec<Article>,
    },
    Error {
        /// NewsAPI's own message when it sent one, otherwise the transport error.
        message: String,
        articles: Vec<Article>,
    },
}

/// Structured failure reported by [`Aggregator::news_data`](crate::Aggregator::news_data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// Provider code (e.g. `rateLimited`) or a transport classification (e.g. `ETIMEDOUT`).
    pub code: Option<String>,
    /// HTTP status, absent for transport failures.
    pub status: Option<u16>,
}

/// Result of [`Aggregator::news_data`](crate::Aggregator::news_data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NewsData {
    Success {
        /// HTTP status code of the upstream answer.
        status: u16,
        articles: Vec<Article>,
    },
    Failure {
        error: ErrorInfo,
        articles: Vec<Article>,
    },
}
