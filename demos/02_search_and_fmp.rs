use finnews_rs::{Aggregator, NewsClient, RequestFilter, SearchNews, dispatch, fmp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = NewsClient::from_env()?;
    let aggregator = Aggregator::new(&client);

    println!("--- NewsAPI search: \"federal reserve\" ---");
    match aggregator.search_news("federal reserve").await {
        SearchNews::Success { articles } => {
            for a in articles.iter().take(5) {
                println!("{} {}", a.sentiment.map(|s| s.symbol()).unwrap_or_default(), a.title);
            }
        }
        SearchNews::Error { message, .. } => println!("search failed: {message}"),
    }
    println!();

    println!("--- FMP headlines for AAPL, MSFT ---");
    let outcome = aggregator.stock_news(["AAPL", "MSFT"]).await;
    if let Some(err) = &outcome.error {
        println!("{err}");
    }
    for a in &outcome.articles {
        println!("{} ({})", a.title, a.source.name);
    }
    println!();

    println!("--- FMP symbol search + earnings ---");
    match fmp::search(&client, "nvidia").await {
        Ok(symbols) => symbols
            .iter()
            .take(3)
            .for_each(|s| println!("{} {}", s.symbol, s.name.as_deref().unwrap_or("-"))),
        Err(e) => println!("symbol search failed: {e}"),
    }
    match aggregator.earnings().await {
        Ok(events) => println!("{} earnings reports on the calendar", events.len()),
        Err(e) => println!("earnings calendar failed: {e}"),
    }
    println!();

    println!("--- get-news-data as the UI sees it ---");
    let doc = dispatch(&aggregator, "get-news-data", None).await?;
    println!("{}", serde_json::to_string_pretty(&doc)?);

    let filter = RequestFilter::default();
    println!(
        "ad.doubleclick.net blocked: {}",
        filter.is_blocked("https://ad.doubleclick.net/pixel")
    );

    Ok(())
}
