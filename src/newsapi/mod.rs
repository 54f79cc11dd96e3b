//! NewsAPI (`/v2/everything`) adapter.

mod api;
mod wire;

use std::time::Duration;

use crate::core::client::constants::{FETCH_TIMEOUT, SEARCH_TIMEOUT};
use crate::core::services::contain;
use crate::{Article, NewsClient, NewsError, NewsQuery, NewsSource, SortBy, SourceFuture, SourceOutcome};

/// Query used for the combined headline feed.
pub const LATEST_QUERY: &str = "stocks OR earnings";

/// A builder for one NewsAPI request.
#[derive(Debug, Clone)]
pub struct NewsApiBuilder {
    client: NewsClient,
    query: NewsQuery,
    timeout: Duration,
}

impl NewsApiBuilder {
    /// Creates a request for `query` with a 5 second timeout.
    pub fn new(client: &NewsClient, query: NewsQuery) -> Self {
        Self {
            client: client.clone(),
            query,
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Latest English finance headlines, newest first.
    pub fn latest(client: &NewsClient) -> Self {
        Self::new(
            client,
            NewsQuery::new(LATEST_QUERY).sort_by(SortBy::PublishedAt),
        )
    }

    /// Free-text search: 20 results, 10 second timeout, provider ordering.
    pub fn search(client: &NewsClient, q: impl Into<String>) -> Self {
        Self::new(client, NewsQuery::new(q).page_size(20)).timeout(SEARCH_TIMEOUT)
    }

    /// Overrides the whole-request timeout.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = dur;
        self
    }

    /// The query this request will send.
    pub const fn query(&self) -> &NewsQuery {
        &self.query
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Upstream` for non-2xx answers (with NewsAPI's `code`/`message`),
    /// `NewsError::Http` for transport failures and `NewsError::Json` for malformed bodies.
    pub async fn fetch(self) -> Result<Vec<Article>, NewsError> {
        self.fetch_with_status().await.map(|(_, articles)| articles)
    }

    /// Like [`fetch`](Self::fetch), also returning NewsAPI's HTTP status code.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch).
    #[tracing::instrument(name = "newsapi", skip(self), err(level = "debug"), fields(q = %self.query.q))]
    pub async fn fetch_with_status(self) -> Result<(u16, Vec<Article>), NewsError> {
        api::fetch_articles(&self.client, &self.query, self.timeout).await
    }

    /// Executes the request, folding any failure into a degraded outcome.
    pub async fn fetch_contained(self) -> SourceOutcome {
        contain("NewsAPI", "NewsAPI failed".into(), self.fetch()).await
    }
}

impl NewsSource for NewsApiBuilder {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    fn fetch_latest(&self) -> SourceFuture<'_> {
        Box::pin(self.clone().fetch())
    }
}
