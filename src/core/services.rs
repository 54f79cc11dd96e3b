use std::future::Future;
use std::pin::Pin;

use crate::core::{Article, NewsError, SourceOutcome};

/// Boxed future returned by [`NewsSource::fetch_latest`].
pub type SourceFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Article>, NewsError>> + Send + 'a>>;

/// A provider the aggregator can fan out to.
///
/// This decouples the aggregator from the concrete adapters, so the merge logic can be
/// driven by any set of sources. It is implemented by [`NewsApiBuilder`](crate::NewsApiBuilder),
/// [`GNewsBuilder`](crate::GNewsBuilder) and [`FmpStockNewsBuilder`](crate::FmpStockNewsBuilder).
pub trait NewsSource: Send + Sync {
    /// Human-readable provider label used in logs.
    fn name(&self) -> &str;

    /// Marker recorded on a degraded outcome.
    fn failure_marker(&self) -> String {
        format!("{} failed", self.name())
    }

    /// Performs exactly one outbound request for this source's latest headlines.
    fn fetch_latest(&self) -> SourceFuture<'_>;
}

/// Awaits `fut` and folds any error into a degraded [`SourceOutcome`], logging it.
pub(crate) async fn contain<F>(provider: &str, marker: String, fut: F) -> SourceOutcome
where
    F: Future<Output = Result<Vec<Article>, NewsError>>,
{
    match fut.await {
        Ok(articles) => {
            tracing::debug!(provider, count = articles.len(), "source returned articles");
            SourceOutcome::ok(articles)
        }
        Err(e) => {
            tracing::warn!(provider, status = ?e.status(), error = %e, "source failed; continuing without it");
            SourceOutcome::degraded(marker)
        }
    }
}
