//! GNews (`/api/v4/search`) adapter.

mod api;
mod wire;

use std::time::Duration;

use crate::core::client::constants::FETCH_TIMEOUT;
use crate::core::services::contain;
use crate::{Article, NewsClient, NewsError, NewsQuery, NewsSource, SourceFuture, SourceOutcome};

/// Query used for the combined headline feed.
pub const LATEST_QUERY: &str = "earnings OR stocks";

/// A builder for one GNews search request.
#[derive(Debug, Clone)]
pub struct GNewsBuilder {
    client: NewsClient,
    query: NewsQuery,
    timeout: Duration,
}

impl GNewsBuilder {
    /// Creates a request for `query` with a 5 second timeout.
    pub fn new(client: &NewsClient, query: NewsQuery) -> Self {
        Self {
            client: client.clone(),
            query,
            timeout: FETCH_TIMEOUT,
        }
    }

    /// Ten latest English headlines from US outlets.
    pub fn latest(client: &NewsClient) -> Self {
        Self::new(
            client,
            NewsQuery::new(LATEST_QUERY).country("us").page_size(10),
        )
    }

    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = dur;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Upstream` for non-2xx answers, `NewsError::Http` for transport
    /// failures and `NewsError::Json` when the body lacks an `articles` array.
    #[tracing::instrument(name = "gnews", skip(self), err(level = "debug"), fields(q = %self.query.q))]
    pub async fn fetch(self) -> Result<Vec<Article>, NewsError> {
        api::fetch_articles(&self.client, &self.query, self.timeout).await
    }

    /// Executes the request, folding any failure into a degraded outcome.
    pub async fn fetch_contained(self) -> SourceOutcome {
        contain("GNews", "GNews failed".into(), self.fetch()).await
    }
}

impl NewsSource for GNewsBuilder {
    fn name(&self) -> &str {
        "GNews"
    }

    fn fetch_latest(&self) -> SourceFuture<'_> {
        Box::pin(self.clone().fetch())
    }
}
