use chrono::NaiveDate;
use serde::Serialize;

/// A symbol match from FMP's `/search` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FmpSymbol {
    /// Ticker symbol, e.g. `AAPL`.
    pub symbol: String,
    /// Company or fund name.
    pub name: Option<String>,
    pub currency: Option<String>,
    /// Long exchange name, e.g. `NASDAQ Global Select`.
    pub exchange: Option<String>,
    /// Short exchange code, e.g. `NASDAQ`.
    pub exchange_short_name: Option<String>,
}

/// One row of FMP's earnings calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsEvent {
    pub symbol: String,
    /// Report date.
    pub date: NaiveDate,
    /// Reported EPS; `None` until the company reports.
    pub eps: Option<f64>,
    pub eps_estimated: Option<f64>,
    pub revenue: Option<f64>,
    pub revenue_estimated: Option<f64>,
    /// `bmo` (before market open), `amc` (after market close) or similar.
    pub time: Option<String>,
}
