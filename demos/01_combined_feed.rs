use finnews_rs::{Aggregator, CombinedNews, NewsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    finnews_rs::init_tracing();

    let client = NewsClient::from_env()?;
    let aggregator = Aggregator::new(&client);

    println!("--- Combined NewsAPI + GNews feed ---");
    match aggregator.combined_news().await {
        CombinedNews::Articles { articles, errors } => {
            for source in &errors {
                println!("(degraded: {source})");
            }
            for a in articles.into_iter().map(finnews_rs::Article::tagged) {
                println!(
                    "{} {} [{}] {}",
                    a.sentiment.map(|s| s.symbol()).unwrap_or_default(),
                    a.published_at.format("%Y-%m-%d %H:%M"),
                    a.source.name,
                    a.title
                );
            }
        }
        CombinedNews::Failed { error } => println!("{error}"),
    }

    Ok(())
}
