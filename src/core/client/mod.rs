//! Public client surface + builder.
//! Endpoint defaults and normalization fallbacks live in `constants`.

pub(crate) mod constants;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::core::{NewsConfig, NewsError};
use constants::USER_AGENT;

/// Shared HTTP client plus the provider configuration it talks to.
///
/// Cloning is cheap; clones share the connection pool and the configuration.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    config: Arc<NewsConfig>,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /// Builds a client from settings found in the environment (and `.env`).
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Config` for malformed URLs or `NewsError::Http` if the
    /// underlying HTTP client cannot be created.
    pub fn from_env() -> Result<Self, NewsError> {
        Self::builder().config(NewsConfig::from_env()?).build()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    config: Option<NewsConfig>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Use these provider endpoints and keys instead of the public defaults.
    #[must_use]
    pub fn config(mut self, config: NewsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set a connect timeout. Default: none.
    ///
    /// Whole-request timeouts are applied per call by each adapter.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Http` if the TLS backend cannot be initialized.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let config = match self.config {
            Some(c) => c,
            None => NewsConfig::builder().build()?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(NewsClient {
            http: httpb.build()?,
            config: Arc::new(config),
        })
    }
}
