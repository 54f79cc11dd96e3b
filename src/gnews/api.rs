use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::client::constants::{PLACEHOLDER_TITLE, PLACEHOLDER_URL, UNKNOWN_SOURCE};
use crate::core::normalize::{present, published_at};
use crate::core::{Article, NewsClient, NewsError, NewsQuery, Source, net};
use crate::gnews::wire;

pub(super) async fn fetch_articles(
    client: &NewsClient,
    query: &NewsQuery,
    timeout: Duration,
) -> Result<Vec<Article>, NewsError> {
    let cfg = &client.config().gnews;
    let mut url = cfg.base_url.clone();
    url.path_segments_mut()
        .map_err(|()| NewsError::Config(format!("GNews base url cannot be a base: {}", cfg.base_url)))?
        .pop_if_empty()
        .push("search");
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", &query.q)
            .append_pair("lang", &query.language);
        if let Some(c) = &query.country {
            qp.append_pair("country", c);
        }
        if let Some(n) = query.page_size {
            qp.append_pair("max", &n.to_string());
        }
        qp.append_pair("token", &cfg.api_key);
    }

    let envelope: wire::Envelope = net::get_json(client, url, timeout).await?;
    let fetched_at = Utc::now();

    Ok(envelope
        .articles
        .into_iter()
        .map(|raw| normalize(raw, fetched_at))
        .collect())
}

pub(crate) fn normalize(raw: wire::RawArticle, fetched_at: DateTime<Utc>) -> Article {
    Article {
        title: present(raw.title).unwrap_or_else(|| PLACEHOLDER_TITLE.into()),
        description: raw.description.unwrap_or_default(),
        url: present(raw.url).unwrap_or_else(|| PLACEHOLDER_URL.into()),
        // GNews items without an image stay imageless; no fallback.
        image_url: present(raw.image),
        published_at: published_at(raw.published_at.as_deref(), fetched_at),
        source: Source {
            name: present(raw.source.and_then(|s| s.name))
                .unwrap_or_else(|| UNKNOWN_SOURCE.into()),
        },
        sentiment: None,
    }
}
