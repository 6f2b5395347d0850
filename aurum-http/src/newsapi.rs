use std::time::Duration;

use async_trait::async_trait;
use aurum_core::connector::{AurumConnector, NewsProvider};
use aurum_core::payload::NewsApiResponse;
use aurum_core::{ConnectorKey, NewsPayload, ProviderError};

use crate::http::{Endpoint, clean_key, env_key};

/// NewsAPI `/v2/everything` connector. Requires `NEWS_API_KEY`.
#[derive(Debug, Clone)]
pub struct NewsApiConnector {
    api_key: Option<String>,
    page_size: u8,
    http: Endpoint,
}

impl NewsApiConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("newsapi");
    /// Environment variable holding the API key.
    pub const ENV: &'static str = "NEWS_API_KEY";
    /// Production base URL.
    pub const DEFAULT_BASE: &'static str = "https://newsapi.org";

    /// Build with an explicit key; `None` or blank leaves it unconfigured.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: clean_key(api_key),
            page_size: 3,
            http: Endpoint::new(Self::KEY.as_str(), Self::DEFAULT_BASE),
        }
    }

    /// Build with the key read from `NEWS_API_KEY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env_key(Self::ENV))
    }

    /// Number of articles requested per call (default 3).
    #[must_use]
    pub fn with_page_size(mut self, n: u8) -> Self {
        self.page_size = n.max(1);
        self
    }

    /// Point at another host (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.http.set_base(base);
        self
    }

    /// Override the client-side request deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.set_timeout(timeout);
        self
    }
}

impl AurumConnector for NewsApiConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "NewsAPI"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl NewsProvider for NewsApiConnector {
    async fn headlines(&self, query: &str) -> Result<NewsPayload, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::unconfigured(self.name()))?;
        let q = format!("gold {}", query.trim());
        let page_size = self.page_size.to_string();
        let url = self.http.url(
            "/v2/everything",
            &[
                ("q", q.trim()),
                ("apiKey", key),
                ("sortBy", "publishedAt"),
                ("pageSize", &page_size),
                ("language", "en"),
            ],
        )?;
        let body: NewsApiResponse = self.http.json(self.http.get(url)).await?;
        Ok(NewsPayload::NewsApi(body))
    }
}
