use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{NewsClient, NewsError};

/// Error body shape shared (loosely) by NewsAPI, GNews and FMP.
#[derive(Deserialize, Default)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    #[serde(rename = "Error Message")]
    fmp_message: Option<String>,
    errors: Option<Vec<String>>,
}

const SECRET_PARAMS: [&str; 3] = ["apiKey", "apikey", "token"];

/// Returns `url` with credential query parameters masked, for logs and errors.
pub(crate) fn redact(url: &Url) -> Url {
    if !url.query_pairs().any(|(k, _)| SECRET_PARAMS.contains(&k.as_ref())) {
        return url.clone();
    }
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if SECRET_PARAMS.contains(&k.as_ref()) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out
}

/// Issues one GET bounded by `timeout` and decodes the JSON body.
///
/// Non-2xx responses become `NewsError::Upstream`, carrying the provider's `code` and
/// `message` when the body is a JSON error document.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &NewsClient,
    url: Url,
    timeout: Duration,
) -> Result<T, NewsError> {
    get_json_with_status(client, url, timeout).await.map(|(_, body)| body)
}

/// Like [`get_json`], also returning the (successful) HTTP status code.
pub(crate) async fn get_json_with_status<T: DeserializeOwned>(
    client: &NewsClient,
    url: Url,
    timeout: Duration,
) -> Result<(u16, T), NewsError> {
    let shown = redact(&url);
    tracing::debug!(url = %shown, ?timeout, "outbound request");

    // reqwest errors render their URL; swap in the masked one before they surface.
    let resp = client
        .http()
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| e.with_url(shown.clone()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| e.with_url(shown.clone()))?;

    if !status.is_success() {
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.fmp_message)
            .or_else(|| parsed.errors.and_then(|e| e.into_iter().next()))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        return Err(NewsError::Upstream {
            status: status.as_u16(),
            code: parsed.code,
            message,
            url: shown.to_string(),
        });
    }

    Ok((status.as_u16(), serde_json::from_str(&body)?))
}
