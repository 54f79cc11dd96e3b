//! Centralized constants for default endpoints, UA and normalization fallbacks.

use std::time::Duration;

/// Identifies this crate to the upstream providers.
pub(crate) const USER_AGENT: &str = concat!("finnews-rs/", env!("CARGO_PKG_VERSION"));

/// NewsAPI `everything` endpoint (query string is appended).
pub(crate) const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// GNews v4 API root (`/search` is appended).
pub(crate) const DEFAULT_GNEWS_API_URL: &str = "https://gnews.io/api/v4";

/// Financial Modeling Prep v3 API root (endpoint paths are appended).
pub(crate) const DEFAULT_FMP_API_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Bound on a general (latest headlines) fetch.
pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Bound on a free-text search.
pub(crate) const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Image shown for FMP articles that carry none.
pub const FALLBACK_IMAGE: &str =
    "https://preview.redd.it/where-is-uuh-from-does-anyone-know-the-origin-v0-bm1xva9aq59c1.gif";

/// Title used when a provider omits one.
pub const PLACEHOLDER_TITLE: &str = "No title available";

/// Link used when a provider omits one.
pub const PLACEHOLDER_URL: &str = "#";

/// Source name used when NewsAPI or GNews omit one.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Source name used when FMP omits the originating site.
pub const FMP_SOURCE: &str = "Financial Modeling Prep";
