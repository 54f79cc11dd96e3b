use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-way headline mood derived from keyword counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// More positive than negative keywords.
    #[serde(rename = "📈")]
    Up,
    /// More negative than positive keywords.
    #[serde(rename = "📉")]
    Down,
    /// Balanced, or no keywords at all.
    #[serde(rename = "➖")]
    Flat,
}

impl Sentiment {
    /// The marker shown next to a headline.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Up => "📈",
            Self::Down => "📉",
            Self::Flat => "➖",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The provider (or originating site) an article came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
}

/// A normalized news article.
///
/// Every field except `image_url` and `sentiment` is always populated; providers that omit
/// a value get the documented placeholder instead (see the constants in the crate root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The headline.
    pub title: String,
    /// Summary text; empty when the provider has none.
    pub description: String,
    /// Link to the full article.
    pub url: String,
    /// Thumbnail. `None` only for GNews items without an image.
    #[serde(rename = "urlToImage")]
    pub image_url: Option<String>,
    /// Publication time, or the fetch time when the provider omitted or garbled it.
    pub published_at: DateTime<Utc>,
    /// Originating provider or site.
    pub source: Source,
    /// Keyword sentiment of the title, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl Article {
    /// Returns the article with its title's sentiment attached.
    #[must_use]
    pub fn tagged(mut self) -> Self {
        self.sentiment = Some(crate::sentiment::analyze(&self.title));
        self
    }
}

/// NewsAPI `sortBy` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    PublishedAt,
    Relevancy,
    Popularity,
}

impl SortBy {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::PublishedAt => "publishedAt",
            Self::Relevancy => "relevancy",
            Self::Popularity => "popularity",
        }
    }
}

/// Per-request search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    /// Free-text query (providers accept `OR`/`AND` operators).
    pub q: String,
    /// Two-letter language code.
    pub language: String,
    /// Maximum number of results requested; provider default when `None`.
    pub page_size: Option<u32>,
    /// Result ordering; provider default when `None`.
    pub sort_by: Option<SortBy>,
    /// Two-letter country code (GNews only).
    pub country: Option<String>,
}

impl NewsQuery {
    /// An English query for `q` with provider-default paging and ordering.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            language: "en".into(),
            page_size: None,
            sort_by: None,
            country: None,
        }
    }

    #[must_use]
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }

    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = Some(n);
        self
    }

    #[must_use]
    pub const fn sort_by(mut self, s: SortBy) -> Self {
        self.sort_by = Some(s);
        self
    }

    #[must_use]
    pub fn country(mut self, c: impl Into<String>) -> Self {
        self.country = Some(c.into());
        self
    }
}

/// Result of one contained adapter call.
///
/// A failed source is a *degraded* outcome: no articles plus an error marker, never an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceOutcome {
    pub articles: Vec<Article>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceOutcome {
    pub(crate) const fn ok(articles: Vec<Article>) -> Self {
        Self {
            articles,
            error: None,
        }
    }

    pub(crate) fn degraded(reason: impl Into<String>) -> Self {
        Self {
            articles: Vec::new(),
            error: Some(reason.into()),
        }
    }

    /// `true` when the source failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
