//! Fan-out over the news sources and the three request/response operations built on it.

mod model;

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::join_all;

pub use model::{ALL_SOURCES_FAILED, CombinedNews, ErrorInfo, NewsData, SearchNews};

use crate::core::client::constants::FETCH_TIMEOUT;
use crate::core::services::contain;
use crate::fmp::{self, EarningsEvent, FmpStockNewsBuilder};
use crate::{
    Article, GNewsBuilder, NewsApiBuilder, NewsClient, NewsError, NewsQuery, NewsSource, SortBy,
    SourceOutcome,
};

/// Query used by [`Aggregator::news_data`] when the caller supplies none.
pub const DEFAULT_NEWS_DATA_QUERY: &str = "stocks OR market";

/// Merges the headline feeds of several sources.
#[derive(Clone)]
pub struct Aggregator {
    client: NewsClient,
    sources: Vec<Arc<dyn NewsSource>>,
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("Aggregator")
            .field("client", &self.client)
            .field("sources", &names)
            .finish()
    }
}

impl Aggregator {
    /// An aggregator over NewsAPI and GNews latest headlines.
    pub fn new(client: &NewsClient) -> Self {
        Self::with_sources(
            client,
            vec![
                Arc::new(NewsApiBuilder::latest(client)),
                Arc::new(GNewsBuilder::latest(client)),
            ],
        )
    }

    /// An aggregator whose combined feed draws from `sources`, in that order.
    ///
    /// The single-provider operations still go to NewsAPI and FMP through `client`.
    pub fn with_sources(client: &NewsClient, sources: Vec<Arc<dyn NewsSource>>) -> Self {
        Self {
            client: client.clone(),
            sources,
        }
    }

    /// Fetches every source concurrently and merges the results, newest first.
    ///
    /// A failing source contributes nothing; the others still come through. Articles with
    /// equal timestamps keep their source order.
    #[tracing::instrument(skip(self), fields(sources = self.sources.len()))]
    pub async fn combined_news(&self) -> CombinedNews {
        let branches = self
            .sources
            .iter()
            .map(|s| contain(s.name(), s.failure_marker(), s.fetch_latest()));

        match AssertUnwindSafe(join_all(branches)).catch_unwind().await {
            Ok(outcomes) => {
                let (articles, errors) = merge(outcomes);
                tracing::debug!(count = articles.len(), failed = errors.len(), "merged feed");
                CombinedNews::Articles { articles, errors }
            }
            Err(_) => {
                tracing::error!("news fan-out panicked");
                CombinedNews::Failed {
                    error: ALL_SOURCES_FAILED.into(),
                }
            }
        }
    }

    /// Free-text NewsAPI search (20 results), sentiment-tagged.
    #[tracing::instrument(skip(self))]
    pub async fn search_news(&self, query: &str) -> SearchNews {
        match NewsApiBuilder::search(&self.client, query).fetch().await {
            Ok(articles) => SearchNews::Success {
                articles: tag_all(articles),
            },
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                SearchNews::Error {
                    message: e
                        .upstream_message()
                        .map_or_else(|| e.to_string(), str::to_owned),
                    articles: Vec::new(),
                }
            }
        }
    }

    /// Ten newest NewsAPI articles for `query` (default [`DEFAULT_NEWS_DATA_QUERY`]),
    /// sentiment-tagged.
    #[tracing::instrument(skip(self))]
    pub async fn news_data(&self, query: Option<&str>) -> NewsData {
        let q = query
            .filter(|q| !q.trim().is_empty())
            .unwrap_or(DEFAULT_NEWS_DATA_QUERY);
        let request = NewsApiBuilder::new(
            &self.client,
            NewsQuery::new(q).sort_by(SortBy::PublishedAt).page_size(10),
        )
        .timeout(FETCH_TIMEOUT);

        match request.fetch_with_status().await {
            Ok((status, articles)) => NewsData::Success {
                status,
                articles: tag_all(articles),
            },
            Err(e) => {
                tracing::warn!(error = %e, "news data request failed");
                NewsData::Failure {
                    error: ErrorInfo {
                        message: e.to_string(),
                        code: e.code(),
                        status: e.status(),
                    },
                    articles: Vec::new(),
                }
            }
        }
    }

    /// FMP headlines about `tickers`, degraded on failure.
    pub async fn stock_news<I, S>(&self, tickers: I) -> SourceOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FmpStockNewsBuilder::new(&self.client, tickers)
            .fetch_contained()
            .await
    }

    /// FMP earnings calendar.
    ///
    /// # Errors
    ///
    /// Returns `NewsError` if FMP cannot be reached or rejects the request.
    pub async fn earnings(&self) -> Result<Vec<EarningsEvent>, NewsError> {
        fmp::earnings(&self.client).await
    }
}

fn merge(outcomes: Vec<SourceOutcome>) -> (Vec<Article>, Vec<String>) {
    let mut articles = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        articles.extend(outcome.articles);
        errors.extend(outcome.error);
    }
    // stable: ties keep concatenation order
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    (articles, errors)
}

fn tag_all(articles: Vec<Article>) -> Vec<Article> {
    articles.into_iter().map(Article::tagged).collect()
}
