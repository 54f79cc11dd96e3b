//! Denylist of ad and tracker URLs for the rendering surface.
//!
//! Patterns use the `scheme://host/path` wildcard form, where `*` matches any run of
//! characters. A host pattern starting with `*.` also matches the bare domain. Provider
//! API calls made by this crate do not go through this filter.

use url::Url;

/// Patterns blocked by [`RequestFilter::default_denylist`].
pub const DEFAULT_DENYLIST: [&str; 4] = [
    "*://ad.*/*",
    "*://track.*/*",
    "*://*.omnitagjs.com/*",
    "*://audienceexposure.com/*",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlPattern {
    scheme: String,
    host: String,
    path: String,
}

impl UrlPattern {
    fn parse(raw: &str) -> Option<Self> {
        let (scheme, rest) = raw.split_once("://")?;
        let (host, path) = match rest.find('/') {
            Some(i) => rest.split_at(i),
            None => (rest, "/*"),
        };
        if host.is_empty() {
            return None;
        }
        Some(Self {
            scheme: scheme.to_ascii_lowercase(),
            host: host.to_ascii_lowercase(),
            path: path.to_string(),
        })
    }

    fn matches(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let scheme_ok = if self.scheme == "*" {
            matches!(url.scheme(), "http" | "https" | "ws" | "wss")
        } else {
            self.scheme == url.scheme()
        };
        let host = host.to_ascii_lowercase();
        let host_ok = glob(&self.host, &host)
            || self
                .host
                .strip_prefix("*.")
                .is_some_and(|bare| glob(bare, &host));
        let mut path = url.path().to_string();
        if let Some(q) = url.query() {
            path.push('?');
            path.push_str(q);
        }
        scheme_ok && host_ok && glob(&self.path, &path)
    }
}

/// Wildcard match where `*` spans any (possibly empty) run of characters.
fn glob(pattern: &str, text: &str) -> bool {
    let p = pattern.as_bytes();
    let t = text.as_bytes();
    let (mut pi, mut ti) = (0, 0);
    let mut star: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && p[pi] == b'*' {
            star = Some((pi, ti));
            pi += 1;
        } else if pi < p.len() && p[pi] == t[ti] {
            pi += 1;
            ti += 1;
        } else if let Some((sp, st)) = star {
            pi = sp + 1;
            ti = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == b'*')
}

/// Decides whether an outbound sub-request of the rendering surface should be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFilter {
    patterns: Vec<UrlPattern>,
}

impl Default for RequestFilter {
    fn default() -> Self {
        Self::default_denylist()
    }
}

impl RequestFilter {
    /// The built-in ad and tracker denylist.
    pub fn default_denylist() -> Self {
        Self::new(DEFAULT_DENYLIST)
    }

    /// Builds a filter from wildcard patterns; malformed patterns are skipped with a warning.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                let parsed = UrlPattern::parse(raw);
                if parsed.is_none() {
                    tracing::warn!(pattern = raw, "ignoring malformed url pattern");
                }
                parsed
            })
            .collect();
        Self { patterns }
    }

    /// `true` if `url` matches any denylisted pattern. Unparseable URLs are not blocked.
    #[must_use]
    pub fn is_blocked(&self, url: &str) -> bool {
        let Ok(url) = Url::parse(url) else {
            return false;
        };
        let blocked = self.patterns.iter().any(|p| p.matches(&url));
        if blocked {
            tracing::debug!(url = %url, "blocked request");
        }
        blocked
    }

    /// Number of active patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
