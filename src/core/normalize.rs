//! Helpers shared by the provider adapters when turning wire records into [`Article`]s.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Treats empty and whitespace-only strings as missing.
pub(crate) fn present(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

/// Parses a provider timestamp.
///
/// Accepts RFC 3339 (NewsAPI, GNews) and FMP's zone-less `YYYY-MM-DD HH:MM:SS`, which is
/// read as UTC. Anything else, including absence, yields `fallback`.
pub(crate) fn published_at(raw: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return fallback;
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .unwrap_or(fallback)
}
