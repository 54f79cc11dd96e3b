use serde::Deserialize;

/// FMP answers some failures (bad key, plan limits) with a 200 and an error object
/// instead of the expected array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Payload<T> {
    List(Vec<T>),
    Error {
        #[serde(rename = "Error Message")]
        message: String,
    },
}

#[derive(Deserialize)]
pub(crate) struct RawStockNews {
    pub(crate) symbol: Option<String>,
    #[serde(rename = "publishedDate")]
    pub(crate) published_date: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) site: Option<String>,
    pub(crate) text: Option<String>,
    pub(crate) url: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawSymbol {
    pub(crate) symbol: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) currency: Option<String>,
    #[serde(rename = "stockExchange")]
    pub(crate) stock_exchange: Option<String>,
    #[serde(rename = "exchangeShortName")]
    pub(crate) exchange_short_name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawEarnings {
    pub(crate) date: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) eps: Option<f64>,
    #[serde(rename = "epsEstimated")]
    pub(crate) eps_estimated: Option<f64>,
    pub(crate) time: Option<String>,
    pub(crate) revenue: Option<f64>,
    #[serde(rename = "revenueEstimated")]
    pub(crate) revenue_estimated: Option<f64>,
}
