//! Request/response surface consumed by a UI shell.
//!
//! Each channel maps to one [`Aggregator`] operation and answers with the JSON document the
//! presentation layer renders.

use std::str::FromStr;

use crate::{Aggregator, NewsError};

/// The operations a UI shell may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// `get-news`: combined NewsAPI + GNews feed.
    GetNews,
    /// `get-news-data`: newest NewsAPI headlines with sentiment.
    GetNewsData,
    /// `search-news`: NewsAPI free-text search with sentiment.
    SearchNews,
}

impl Channel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetNews => "get-news",
            Self::GetNewsData => "get-news-data",
            Self::SearchNews => "search-news",
        }
    }
}

impl FromStr for Channel {
    type Err = NewsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get-news" => Ok(Self::GetNews),
            "get-news-data" => Ok(Self::GetNewsData),
            "search-news" => Ok(Self::SearchNews),
            other => Err(NewsError::UnknownChannel(other.to_string())),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the operation behind `channel` and serializes its response.
///
/// Provider failures never surface here; they are part of the returned document.
///
/// # Errors
///
/// Returns `NewsError::UnknownChannel` for an unrecognized channel name, or
/// `NewsError::Json` if the response cannot be serialized.
#[tracing::instrument(skip(aggregator))]
pub async fn dispatch(
    aggregator: &Aggregator,
    channel: &str,
    query: Option<&str>,
) -> Result<serde_json::Value, NewsError> {
    let value = match channel.parse::<Channel>()? {
        Channel::GetNews => serde_json::to_value(aggregator.combined_news().await)?,
        Channel::GetNewsData => serde_json::to_value(aggregator.news_data(query).await)?,
        Channel::SearchNews => {
            serde_json::to_value(aggregator.search_news(query.unwrap_or_default()).await)?
        }
    };
    Ok(value)
}
