use std::sync::Arc;

use chrono::{TimeZone, Utc};
use finnews_rs::aggregate::ALL_SOURCES_FAILED;
use finnews_rs::{
    Aggregator, Article, CombinedNews, GNewsBuilder, NewsApiBuilder, NewsError, NewsSource,
    Source, SourceFuture,
};
use httpmock::Method::GET;
use serde_json::json;

use crate::common;

fn assert_newest_first(articles: &[Article]) {
    for pair in articles.windows(2) {
        assert!(
            pair[0].published_at >= pair[1].published_at,
            "{} should not precede {}",
            pair[0].published_at,
            pair[1].published_at
        );
    }
}

#[tokio::test]
async fn combined_merges_both_sources_newest_first() {
    let server = common::setup_server();
    let news = common::mock_newsapi_latest(&server);
    let gnews = common::mock_gnews_latest(&server);
    let client = common::client_for(&server);

    let result = Aggregator::new(&client).combined_news().await;
    news.assert();
    gnews.assert();

    let CombinedNews::Articles { articles, errors } = &result else {
        panic!("expected articles, got {result:?}");
    };
    assert!(errors.is_empty());
    assert_eq!(articles.len(), 5);
    assert_newest_first(&articles);

    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Stocks surge on earnings beat",
            "Chipmakers gain as demand outlook improves",
            "Markets plunge amid bearish outlook",
            "Retailer earnings miss expectations",
            "Markets open flat today",
        ]
    );
    assert!(articles.iter().all(|a| a.sentiment.is_none()));
}

#[tokio::test]
async fn combined_keeps_other_source_when_one_fails() {
    let server = common::setup_server();
    let news = common::mock_newsapi_latest(&server);
    let gnews = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(503).body("upstream unavailable");
    });
    let client = common::client_for(&server);

    let result = Aggregator::new(&client).combined_news().await;
    news.assert();
    gnews.assert();

    let CombinedNews::Articles { articles, errors } = &result else {
        panic!("expected articles, got {result:?}");
    };
    assert_eq!(articles.len(), 3);
    assert!(articles.iter().all(|a| a.source.name != "CNBC"));
    assert_eq!(errors.as_slice(), ["GNews failed"]);
}

#[tokio::test]
async fn combined_survives_transport_failure_of_one_source() {
    let server = common::setup_server();
    let gnews = common::mock_gnews_latest(&server);
    let client = common::client_for(&server);
    let dead = common::unreachable_client();

    let aggregator = Aggregator::with_sources(
        &client,
        vec![
            Arc::new(NewsApiBuilder::latest(&dead)),
            Arc::new(GNewsBuilder::latest(&client)),
        ],
    );
    let result = aggregator.combined_news().await;
    gnews.assert();

    assert_eq!(result.articles().len(), 2);
    assert_newest_first(result.articles());
}

#[tokio::test]
async fn combined_with_all_sources_down_is_empty_not_error() {
    let client = common::unreachable_client();

    let result = Aggregator::new(&client).combined_news().await;
    assert!(result.articles().is_empty());
    assert!(matches!(result, CombinedNews::Articles { .. }));

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({ "articles": [] }));
}

#[tokio::test]
async fn combined_ties_keep_source_order() {
    let server = common::setup_server();
    let _news = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200).json_body(json!({
            "status": "ok",
            "articles": [{
                "title": "from newsapi", "url": "https://a.example/1",
                "publishedAt": "2026-10-15T12:00:00Z", "source": { "name": "A" }
            }]
        }));
    });
    let _gnews = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(200).json_body(json!({
            "articles": [{
                "title": "from gnews", "url": "https://b.example/1",
                "publishedAt": "2026-10-15T12:00:00Z", "source": { "name": "B" }
            }]
        }));
    });
    let client = common::client_for(&server);

    let result = Aggregator::new(&client).combined_news().await;
    let titles: Vec<&str> = result.articles().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["from newsapi", "from gnews"]);
}

struct Canned(Vec<Article>);

impl NewsSource for Canned {
    fn name(&self) -> &str {
        "canned"
    }

    fn fetch_latest(&self) -> SourceFuture<'_> {
        Box::pin(serve(self.0.clone()))
    }
}

struct Exploding;

impl NewsSource for Exploding {
    fn name(&self) -> &str {
        "exploding"
    }

    fn fetch_latest(&self) -> SourceFuture<'_> {
        Box::pin(explode())
    }
}

async fn serve(articles: Vec<Article>) -> Result<Vec<Article>, NewsError> {
    Ok(articles)
}

async fn explode() -> Result<Vec<Article>, NewsError> {
    panic!("source blew up")
}

fn article(title: &str, hour: u32) -> Article {
    Article {
        title: title.into(),
        description: String::new(),
        url: "#".into(),
        image_url: None,
        published_at: Utc.with_ymd_and_hms(2026, 10, 15, hour, 0, 0).unwrap(),
        source: Source {
            name: "canned".into(),
        },
        sentiment: None,
    }
}

#[tokio::test]
async fn combined_accepts_arbitrary_sources() {
    let client = common::unreachable_client();
    let aggregator = Aggregator::with_sources(
        &client,
        vec![
            Arc::new(Canned(vec![article("old", 1), article("new", 23)])),
            Arc::new(Canned(vec![article("mid", 12)])),
        ],
    );

    let result = aggregator.combined_news().await;
    let titles: Vec<&str> = result.articles().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["new", "mid", "old"]);
}

#[tokio::test]
async fn combined_reports_generic_failure_when_fan_out_breaks() {
    let client = common::unreachable_client();
    let aggregator = Aggregator::with_sources(
        &client,
        vec![Arc::new(Canned(vec![article("fine", 1)])), Arc::new(Exploding)],
    );

    let result = aggregator.combined_news().await;
    assert_eq!(
        result,
        CombinedNews::Failed {
            error: ALL_SOURCES_FAILED.into()
        }
    );
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "error": "Failed to fetch from all news sources" })
    );
}

#[tokio::test]
async fn combined_logs_degraded_source_once_as_warning() {
    let (logs, _guard) = common::capture_logs();
    let server = common::setup_server();
    let _news = common::mock_newsapi_latest(&server);
    let _gnews = server.mock(|when, then| {
        when.method(GET).path("/api/v4/search");
        then.status(500).body("boom");
    });
    let client = common::client_for(&server);

    let result = Aggregator::new(&client).combined_news().await;
    assert_eq!(result.articles().len(), 3);

    let out = logs.contents();
    assert_eq!(out.matches(" WARN ").count(), 1, "logs: {out}");
    assert!(!out.contains("ERROR"), "logs: {out}");
    common::assert_no_keys(&out);
}

#[tokio::test]
async fn combined_with_all_sources_down_keeps_keys_out_of_logs() {
    let (logs, _guard) = common::capture_logs();
    let client = common::unreachable_client();

    let result = Aggregator::new(&client).combined_news().await;
    assert!(result.articles().is_empty());
    common::assert_no_keys(&logs.contents());
}
