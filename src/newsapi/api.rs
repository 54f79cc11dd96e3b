use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::client::constants::{PLACEHOLDER_TITLE, PLACEHOLDER_URL, UNKNOWN_SOURCE};
use crate::core::normalize::{present, published_at};
use crate::core::{Article, NewsClient, NewsError, NewsQuery, Source, net};
use crate::newsapi::wire;

pub(super) async fn fetch_articles(
    client: &NewsClient,
    query: &NewsQuery,
    timeout: Duration,
) -> Result<(u16, Vec<Article>), NewsError> {
    let cfg = &client.config().news_api;
    let mut url = cfg.base_url.clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", &query.q)
            .append_pair("language", &query.language);
        if let Some(sort) = query.sort_by {
            qp.append_pair("sortBy", sort.as_str());
        }
        if let Some(n) = query.page_size {
            qp.append_pair("pageSize", &n.to_string());
        }
        qp.append_pair("apiKey", &cfg.api_key);
    }

    let (status, envelope): (u16, wire::Envelope) =
        net::get_json_with_status(client, url, timeout).await?;
    let fetched_at = Utc::now();

    let articles = envelope
        .articles
        .unwrap_or_default()
        .into_iter()
        .map(|raw| normalize(raw, fetched_at))
        .collect();
    Ok((status, articles))
}

pub(crate) fn normalize(raw: wire::RawArticle, fetched_at: DateTime<Utc>) -> Article {
    Article {
        title: present(raw.title).unwrap_or_else(|| PLACEHOLDER_TITLE.into()),
        description: raw.description.unwrap_or_default(),
        url: present(raw.url).unwrap_or_else(|| PLACEHOLDER_URL.into()),
        image_url: present(raw.url_to_image),
        published_at: published_at(raw.published_at.as_deref(), fetched_at),
        source: Source {
            name: present(raw.source.and_then(|s| s.name))
                .unwrap_or_else(|| UNKNOWN_SOURCE.into()),
        },
        sentiment: None,
    }
}
