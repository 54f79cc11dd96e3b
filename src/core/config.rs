//! Provider endpoints and credentials.
//!
//! A [`NewsConfig`] is assembled once at startup and never mutated afterwards. It is handed
//! to [`NewsClient`](crate::NewsClient) explicitly; nothing in this crate reads the process
//! environment after [`NewsConfig::from_env`] returns.

use std::env;

use url::Url;

use crate::core::NewsError;
use crate::core::client::constants::{
    DEFAULT_FMP_API_URL, DEFAULT_GNEWS_API_URL, DEFAULT_NEWS_API_URL,
};

/// Base URL and API key for one provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Endpoint root for the provider.
    pub base_url: Url,
    /// API key; may be empty, in which case the provider rejects the call.
    pub api_key: String,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

impl ProviderConfig {
    /// Creates a provider entry from a base URL string and key.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, NewsError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| NewsError::Config(format!("invalid base url {base_url:?}: {e}")))?;
        Ok(Self {
            base_url,
            api_key: api_key.into(),
        })
    }
}

/// Process-wide, immutable provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsConfig {
    /// NewsAPI (`/v2/everything`).
    pub news_api: ProviderConfig,
    /// GNews (`/api/v4`).
    pub gnews: ProviderConfig,
    /// Financial Modeling Prep (`/api/v3`).
    pub fmp: ProviderConfig,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("default provider urls are valid")
    }
}

impl NewsConfig {
    /// Creates a builder seeded with the public provider endpoints and empty keys.
    pub fn builder() -> NewsConfigBuilder {
        NewsConfigBuilder::default()
    }

    /// Reads provider settings from the environment, loading `.env` first when present.
    ///
    /// Recognized variables: `NEWS_API_URL`, `NEWS_API_KEY`, `GNEWS_API_URL`,
    /// `GNEWS_API_KEY`, `FMP_API_URL`, `FMP_API_KEY`. Unset URLs fall back to the public
    /// endpoints; unset keys are left empty.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if a URL variable is set but malformed.
    pub fn from_env() -> Result<Self, NewsError> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) but resolves variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if a URL value is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NewsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut b = Self::builder();
        if let Some(u) = var("NEWS_API_URL") {
            b = b.news_api_url(&u)?;
        }
        if let Some(u) = var("GNEWS_API_URL") {
            b = b.gnews_url(&u)?;
        }
        if let Some(u) = var("FMP_API_URL") {
            b = b.fmp_url(&u)?;
        }
        for (key, provider) in [
            ("NEWS_API_KEY", "NewsAPI"),
            ("GNEWS_API_KEY", "GNews"),
            ("FMP_API_KEY", "FMP"),
        ] {
            if var(key).is_none() {
                tracing::warn!(key, provider, "API key is not set; requests will be rejected");
            }
        }

        b.news_api_key(var("NEWS_API_KEY").unwrap_or_default())
            .gnews_key(var("GNEWS_API_KEY").unwrap_or_default())
            .fmp_key(var("FMP_API_KEY").unwrap_or_default())
            .build()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsConfigBuilder {
    news_api_url: Option<Url>,
    gnews_url: Option<Url>,
    fmp_url: Option<Url>,
    news_api_key: String,
    gnews_key: String,
    fmp_key: String,
}

fn parse_base(raw: &str) -> Result<Url, NewsError> {
    Url::parse(raw).map_err(|e| NewsError::Config(format!("invalid base url {raw:?}: {e}")))
}

impl NewsConfigBuilder {
    /// Override the NewsAPI endpoint (e.g. `https://newsapi.org/v2/everything`).
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if `url` is malformed.
    pub fn news_api_url(mut self, url: &str) -> Result<Self, NewsError> {
        self.news_api_url = Some(parse_base(url)?);
        Ok(self)
    }

    /// Override the GNews root (e.g. `https://gnews.io/api/v4`).
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if `url` is malformed.
    pub fn gnews_url(mut self, url: &str) -> Result<Self, NewsError> {
        self.gnews_url = Some(parse_base(url)?);
        Ok(self)
    }

    /// Override the FMP root (e.g. `https://financialmodelingprep.com/api/v3`).
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if `url` is malformed.
    pub fn fmp_url(mut self, url: &str) -> Result<Self, NewsError> {
        self.fmp_url = Some(parse_base(url)?);
        Ok(self)
    }

    #[must_use]
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = key.into();
        self
    }

    #[must_use]
    pub fn gnews_key(mut self, key: impl Into<String>) -> Self {
        self.gnews_key = key.into();
        self
    }

    #[must_use]
    pub fn fmp_key(mut self, key: impl Into<String>) -> Self {
        self.fmp_key = key.into();
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` if a built-in default URL fails to parse.
    pub fn build(self) -> Result<NewsConfig, NewsError> {
        let news_api_url = match self.news_api_url {
            Some(u) => u,
            None => parse_base(DEFAULT_NEWS_API_URL)?,
        };
        let gnews_url = match self.gnews_url {
            Some(u) => u,
            None => parse_base(DEFAULT_GNEWS_API_URL)?,
        };
        let fmp_url = match self.fmp_url {
            Some(u) => u,
            None => parse_base(DEFAULT_FMP_API_URL)?,
        };

        Ok(NewsConfig {
            news_api: ProviderConfig {
                base_url: news_api_url,
                api_key: self.news_api_key,
            },
            gnews: ProviderConfig {
                base_url: gnews_url,
                api_key: self.gnews_key,
            },
            fmp: ProviderConfig {
                base_url: fmp_url,
                api_key: self.fmp_key,
            },
        })
    }
}
