use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::client::constants::{FALLBACK_IMAGE, FMP_SOURCE, PLACEHOLDER_TITLE, PLACEHOLDER_URL};
use crate::core::normalize::{present, published_at};
use crate::core::{Article, NewsClient, NewsError, ProviderConfig, Source, net};
use crate::fmp::FmpEndpoint;
use crate::fmp::model::{EarningsEvent, FmpSymbol};
use crate::fmp::wire;

impl FmpEndpoint {
    /// Composes base URL, endpoint path and API key.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if the configured base URL cannot carry a path.
    pub fn url(&self, cfg: &ProviderConfig) -> Result<Url, NewsError> {
        let mut url = cfg.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| NewsError::Config(format!("FMP base url cannot be a base: {}", cfg.base_url)))?
            .pop_if_empty()
            .push(self.path());
        {
            let mut qp = url.query_pairs_mut();
            match self {
                Self::Search(query) => {
                    qp.append_pair("query", query);
                }
                Self::StockNews(tickers) => {
                    qp.append_pair("tickers", &tickers.join(","))
                        .append_pair("limit", "10");
                }
                Self::Earnings => {}
            }
            qp.append_pair("apikey", &cfg.api_key);
        }
        Ok(url)
    }

    const fn path(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::StockNews(_) => "stock_news",
            Self::Earnings => "earning_calendar",
        }
    }
}

async fn fetch_list<T: DeserializeOwned>(
    client: &NewsClient,
    endpoint: &FmpEndpoint,
    timeout: Duration,
) -> Result<Vec<T>, NewsError> {
    let url = endpoint.url(&client.config().fmp)?;
    let shown = net::redact(&url).to_string();
    match net::get_json::<wire::Payload<T>>(client, url, timeout).await? {
        wire::Payload::List(items) => Ok(items),
        wire::Payload::Error { message } => Err(NewsError::Upstream {
            status: 200,
            code: None,
            message,
            url: shown,
        }),
    }
}

pub(super) async fn fetch_stock_news(
    client: &NewsClient,
    endpoint: &FmpEndpoint,
    timeout: Duration,
) -> Result<Vec<Article>, NewsError> {
    let raw: Vec<wire::RawStockNews> = fetch_list(client, endpoint, timeout).await?;
    let fetched_at = Utc::now();
    Ok(raw.into_iter().map(|r| normalize(r, fetched_at)).collect())
}

pub(super) async fn fetch_symbols(
    client: &NewsClient,
    endpoint: &FmpEndpoint,
    timeout: Duration,
) -> Result<Vec<FmpSymbol>, NewsError> {
    let raw: Vec<wire::RawSymbol> = fetch_list(client, endpoint, timeout).await?;
    Ok(raw
        .into_iter()
        .filter_map(|r| {
            Some(FmpSymbol {
                symbol: present(r.symbol)?,
                name: r.name,
                currency: r.currency,
                exchange: r.stock_exchange,
                exchange_short_name: r.exchange_short_name,
            })
        })
        .collect())
}

pub(super) async fn fetch_earnings(
    client: &NewsClient,
    endpoint: &FmpEndpoint,
    timeout: Duration,
) -> Result<Vec<EarningsEvent>, NewsError> {
    let raw: Vec<wire::RawEarnings> = fetch_list(client, endpoint, timeout).await?;
    Ok(raw
        .into_iter()
        .filter_map(|r| {
            // Rows without a symbol or a parseable date cannot be placed on a calendar.
            let date = NaiveDate::parse_from_str(r.date.as_deref()?, "%Y-%m-%d").ok()?;
            Some(EarningsEvent {
                symbol: present(r.symbol)?,
                date,
                eps: r.eps,
                eps_estimated: r.eps_estimated,
                revenue: r.revenue,
                revenue_estimated: r.revenue_estimated,
                time: present(r.time),
            })
        })
        .collect())
}

pub(crate) fn normalize(raw: wire::RawStockNews, fetched_at: DateTime<Utc>) -> Article {
    if raw.title.is_none() {
        tracing::debug!(symbol = ?raw.symbol, "FMP item without title");
    }
    Article {
        title: present(raw.title).unwrap_or_else(|| PLACEHOLDER_TITLE.into()),
        description: raw.text.unwrap_or_default(),
        url: present(raw.url).unwrap_or_else(|| PLACEHOLDER_URL.into()),
        image_url: Some(present(raw.image).unwrap_or_else(|| FALLBACK_IMAGE.into())),
        published_at: published_at(raw.published_date.as_deref(), fetched_at),
        source: Source {
            name: present(raw.site).unwrap_or_else(|| FMP_SOURCE.into()),
        },
        sentiment: None,
    }
}
