use chrono::{TimeZone, Utc};
use finnews_rs::{NewsApiBuilder, NewsError, PLACEHOLDER_TITLE, PLACEHOLDER_URL, UNKNOWN_SOURCE};
use httpmock::Method::GET;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn newsapi_latest_normalizes_fixture() {
    let server = common::setup_server();
    let mock = common::mock_newsapi_latest(&server);
    let client = common::client_for(&server);

    let articles = NewsApiBuilder::latest(&client).fetch().await.unwrap();
    mock.assert();

    assert_eq!(articles.len(), 3);
    let first = &articles[0];
    assert_eq!(first.title, "Stocks surge on earnings beat");
    assert_eq!(first.source.name, "Reuters");
    assert_eq!(
        first.image_url.as_deref(),
        Some("https://www.reuters.com/img/surge.jpg")
    );
    assert_eq!(
        first.published_at,
        Utc.with_ymd_and_hms(2026, 10, 15, 10, 0, 0).unwrap()
    );
    assert!(first.sentiment.is_none(), "plain fetch does not tag");
}

#[tokio::test]
async fn newsapi_missing_fields_get_defaults() {
    let server = common::setup_server();
    let _mock = common::mock_newsapi_latest(&server);
    let client = common::client_for(&server);

    let articles = NewsApiBuilder::latest(&client).fetch().await.unwrap();
    let sparse = &articles[1];
    assert_eq!(sparse.description, "");
    assert_eq!(sparse.source.name, UNKNOWN_SOURCE);
    assert!(sparse.image_url.is_none());
}

#[tokio::test]
async fn newsapi_null_title_url_and_date_fall_back() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).json_body(json!({
            "status": "ok",
            "articles": [{ "title": null, "url": null, "publishedAt": null, "source": null }]
        }));
    });
    let client = common::client_for(&server);

    let before = Utc::now();
    let articles = NewsApiBuilder::latest(&client).fetch().await.unwrap();
    let after = Utc::now();
    mock.assert();

    let a = &articles[0];
    assert_eq!(a.title, PLACEHOLDER_TITLE);
    assert_eq!(a.url, PLACEHOLDER_URL);
    assert!(a.published_at >= before && a.published_at <= after);
}

#[tokio::test]
async fn newsapi_search_sends_page_size_and_key() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "tesla")
            .query_param("language", "en")
            .query_param("pageSize", "20")
            .query_param("apiKey", common::NEWS_API_KEY);
        then.status(200).json_body(json!({ "status": "ok", "articles": [] }));
    });
    let client = common::client_for(&server);

    let articles = NewsApiBuilder::search(&client, "tesla").fetch().await.unwrap();
    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn newsapi_non_2xx_carries_code_and_message() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401).json_body(json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        }));
    });
    let client = common::client_for(&server);

    let err = NewsApiBuilder::latest(&client).fetch().await.unwrap_err();
    mock.assert();

    match err {
        NewsError::Upstream {
            status,
            code,
            message,
            url,
        } => {
            assert_eq!(status, 401);
            assert_eq!(code.as_deref(), Some("apiKeyInvalid"));
            assert_eq!(message, "Your API key is invalid or incorrect.");
            assert!(
                !url.contains(common::NEWS_API_KEY),
                "api key must be redacted: {url}"
            );
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn newsapi_contained_failure_is_degraded() {
    let client = common::unreachable_client();

    let outcome = NewsApiBuilder::latest(&client).fetch_contained().await;
    assert!(outcome.is_degraded());
    assert!(outcome.articles.is_empty());
    assert_eq!(outcome.error.as_deref(), Some("NewsAPI failed"));
}
