//! Financial Modeling Prep adapter: ticker news, symbol search and the earnings calendar.

mod api;
mod model;
mod wire;

use std::time::Duration;

pub use model::{EarningsEvent, FmpSymbol};

use crate::core::client::constants::FETCH_TIMEOUT;
use crate::core::services::contain;
use crate::{Article, NewsClient, NewsError, NewsSource, SourceFuture, SourceOutcome};

/// The FMP endpoints this crate knows how to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FmpEndpoint {
    /// `/search?query=..`: symbol lookup.
    Search(String),
    /// `/stock_news?tickers=..&limit=10`: headlines for the given tickers.
    StockNews(Vec<String>),
    /// `/earning_calendar`: upcoming and recent earnings reports.
    Earnings,
}

/// Searches FMP for symbols matching `query`.
///
/// # Errors
///
/// Returns `NewsError` if the request fails, FMP answers with an error, or the body is
/// not a list of symbols.
#[tracing::instrument(skip(client), err)]
pub async fn search(client: &NewsClient, query: &str) -> Result<Vec<FmpSymbol>, NewsError> {
    api::fetch_symbols(client, &FmpEndpoint::Search(query.to_string()), FETCH_TIMEOUT).await
}

/// Fetches FMP's earnings calendar.
///
/// # Errors
///
/// Returns `NewsError` if the request fails, FMP answers with an error, or the body is
/// not a list of calendar rows.
#[tracing::instrument(skip(client), err)]
pub async fn earnings(client: &NewsClient) -> Result<Vec<EarningsEvent>, NewsError> {
    api::fetch_earnings(client, &FmpEndpoint::Earnings, FETCH_TIMEOUT).await
}

/// A builder for headlines about specific tickers.
#[derive(Debug, Clone)]
pub struct FmpStockNewsBuilder {
    client: NewsClient,
    tickers: Vec<String>,
    timeout: Duration,
}

impl FmpStockNewsBuilder {
    /// Creates a request for up to ten headlines about `tickers`.
    pub fn new<I, S>(client: &NewsClient, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client: client.clone(),
            tickers: tickers.into_iter().map(Into::into).collect(),
            timeout: FETCH_TIMEOUT,
        }
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
    /// Returns `NewsError` if the request fails, FMP answers with an error, or the body is
    /// not a list of news items.
    #[tracing::instrument(name = "fmp_stock_news", skip(self), err(level = "debug"), fields(tickers = ?self.tickers))]
    pub async fn fetch(self) -> Result<Vec<Article>, NewsError> {
        let endpoint = FmpEndpoint::StockNews(self.tickers);
        api::fetch_stock_news(&self.client, &endpoint, self.timeout).await
    }

    /// Executes the request, folding any failure into a degraded outcome.
    pub async fn fetch_contained(self) -> SourceOutcome {
        contain("FMP", "FMP failed".into(), self.fetch()).await
    }
}

impl NewsSource for FmpStockNewsBuilder {
    fn name(&self) -> &str {
        "FMP"
    }

    fn fetch_latest(&self) -> SourceFuture<'_> {
        Box::pin(self.clone().fetch())
    }
}
