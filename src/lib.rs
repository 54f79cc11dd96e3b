//! finnews-rs: financial headlines from several news APIs in one feed.
//!
//! Three providers are supported: NewsAPI, GNews and Financial Modeling Prep. Each adapter
//! turns its provider's JSON into a normalized [`Article`]; the [`Aggregator`] fans out to
//! the adapters concurrently, tolerates individual failures, and merges the results newest
//! first. Headlines can be tagged with a keyword-count [`Sentiment`].
//!
//! ```no_run
//! # async fn run() -> Result<(), finnews_rs::NewsError> {
//! let client = finnews_rs::NewsClient::from_env()?;
//! let feed = finnews_rs::Aggregator::new(&client).combined_news().await;
//! for article in feed.articles() {
//!     println!("{} {}", article.published_at, article.title);
//! }
//! # Ok(())
//! # }
//! ```

mod core;

pub mod aggregate;
pub mod boundary;
pub mod filter;
pub mod fmp;
pub mod gnews;
pub mod newsapi;
pub mod sentiment;

pub use crate::core::client::constants::{
    FALLBACK_IMAGE, FMP_SOURCE, PLACEHOLDER_TITLE, PLACEHOLDER_URL, UNKNOWN_SOURCE,
};
pub use crate::core::{
    Article, NewsClient, NewsClientBuilder, NewsConfig, NewsConfigBuilder, NewsError, NewsQuery,
    NewsSource, ProviderConfig, Sentiment, SortBy, Source, SourceFuture, SourceOutcome,
};

pub use aggregate::{Aggregator, CombinedNews, ErrorInfo, NewsData, SearchNews};
pub use boundary::{Channel, dispatch};
pub use filter::RequestFilter;
pub use fmp::{EarningsEvent, FmpEndpoint, FmpStockNewsBuilder, FmpSymbol};
pub use gnews::GNewsBuilder;
pub use newsapi::NewsApiBuilder;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `finnews_rs=info`).
///
/// Intended for demos and tests; calling it twice is harmless.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("finnews_rs=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
