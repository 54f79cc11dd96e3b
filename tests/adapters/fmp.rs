use chrono::{NaiveDate, TimeZone, Utc};
use finnews_rs::{
    FALLBACK_IMAGE, FMP_SOURCE, FmpEndpoint, FmpStockNewsBuilder, NewsConfig, NewsError,
    PLACEHOLDER_TITLE, PLACEHOLDER_URL, fmp,
};
use httpmock::Method::GET;
use serde_json::json;

use crate::common;

#[test]
fn fmp_endpoint_urls_compose_base_path_and_key() {
    let cfg = NewsConfig::builder()
        .fmp_url("https://financialmodelingprep.com/api/v3")
        .unwrap()
        .fmp_key("k")
        .build()
        .unwrap()
        .fmp;

    assert_eq!(
        FmpEndpoint::Search("apple".into()).url(&cfg).unwrap().as_str(),
        "https://financialmodelingprep.com/api/v3/search?query=apple&apikey=k"
    );
    assert_eq!(
        FmpEndpoint::StockNews(vec!["AAPL".into(), "MSFT".into()])
            .url(&cfg)
            .unwrap()
            .as_str(),
        "https://financialmodelingprep.com/api/v3/stock_news?tickers=AAPL%2CMSFT&limit=10&apikey=k"
    );
    assert_eq!(
        FmpEndpoint::Earnings.url(&cfg).unwrap().as_str(),
        "https://financialmodelingprep.com/api/v3/earning_calendar?apikey=k"
    );
}

#[tokio::test]
async fn fmp_stock_news_normalizes_and_fills_defaults() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/stock_news")
            .query_param("tickers", "AAPL,MSFT")
            .query_param("limit", "10")
            .query_param("apikey", common::FMP_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("fmp_stock_news"));
    });
    let client = common::client_for(&server);

    let before = Utc::now();
    let articles = FmpStockNewsBuilder::new(&client, ["AAPL", "MSFT"])
        .fetch()
        .await
        .unwrap();
    let after = Utc::now();
    mock.assert();

    let full = &articles[0];
    assert_eq!(full.title, "Apple shares rise ahead of product event");
    assert_eq!(full.description, "Apple gained 2% in afternoon trading.");
    assert_eq!(full.source.name, "seekingalpha.com");
    assert_eq!(
        full.published_at,
        Utc.with_ymd_and_hms(2026, 10, 14, 16, 30, 0).unwrap()
    );

    let sparse = &articles[1];
    assert_eq!(sparse.title, PLACEHOLDER_TITLE);
    assert_eq!(sparse.description, "");
    assert_eq!(sparse.url, PLACEHOLDER_URL);
    assert_eq!(sparse.image_url.as_deref(), Some(FALLBACK_IMAGE));
    assert_eq!(sparse.source.name, FMP_SOURCE);
    assert!(sparse.published_at >= before && sparse.published_at <= after);
}

#[tokio::test]
async fn fmp_error_object_with_200_is_upstream_error() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/stock_news");
        then.status(200).json_body(json!({
            "Error Message": "Invalid API KEY. Please retry or visit our documentation."
        }));
    });
    let client = common::client_for(&server);

    let err = FmpStockNewsBuilder::new(&client, ["AAPL"]).fetch().await.unwrap_err();
    assert_eq!(err.status(), Some(200));
    assert!(
        err.upstream_message()
            .is_some_and(|m| m.starts_with("Invalid API KEY"))
    );

    let outcome = FmpStockNewsBuilder::new(&client, ["AAPL"])
        .fetch_contained()
        .await;
    assert_eq!(outcome.error.as_deref(), Some("FMP failed"));
}

#[tokio::test]
async fn fmp_search_returns_symbols() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/search")
            .query_param("query", "apple")
            .query_param("apikey", common::FMP_KEY);
        then.status(200).body(common::fixture("fmp_search"));
    });
    let client = common::client_for(&server);

    let symbols = fmp::search(&client, "apple").await.unwrap();
    mock.assert();

    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].symbol, "AAPL");
    assert_eq!(symbols[0].name.as_deref(), Some("Apple Inc."));
    assert_eq!(symbols[1].exchange_short_name.as_deref(), Some("NYSE"));
}

#[tokio::test]
async fn fmp_earnings_skips_rows_without_a_date() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/earning_calendar")
            .query_param("apikey", common::FMP_KEY);
        then.status(200).body(common::fixture("fmp_earnings"));
    });
    let client = common::client_for(&server);

    let events = fmp::earnings(&client).await.unwrap();
    mock.assert();

    assert_eq!(events.len(), 2);
    let aapl = &events[0];
    assert_eq!(aapl.symbol, "AAPL");
    assert_eq!(aapl.date, NaiveDate::from_ymd_opt(2026, 10, 28).unwrap());
    assert_eq!(aapl.eps, None);
    assert_eq!(aapl.eps_estimated, Some(1.62));
    assert_eq!(aapl.time.as_deref(), Some("amc"));
    assert_eq!(events[1].eps, Some(4.37));
}

#[tokio::test]
async fn fmp_transport_failure_surfaces_as_http_error() {
    let client = common::unreachable_client();
    let err = fmp::earnings(&client).await.unwrap_err();
    assert!(matches!(err, NewsError::Http(_)), "got {err:?}");
    common::assert_no_keys(&err.to_string());
    common::assert_no_keys(&format!("{err:?}"));
}
