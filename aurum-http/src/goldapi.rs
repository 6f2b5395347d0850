use std::time::Duration;

use async_trait::async_trait;
use aurum_core::connector::{AurumConnector, PriceProvider};
use aurum_core::payload::GoldApiQuote;
use aurum_core::{ConnectorKey, PricePayload, ProviderError};

use crate::http::{Endpoint, clean_key, env_key};

/// GoldAPI (`goldapi.io`) spot connector. Requires `GOLDAPI_KEY`.
#[derive(Debug, Clone)]
pub struct GoldApiConnector {
    api_key: Option<String>,
    http: Endpoint,
}

impl GoldApiConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("goldapi");
    /// Environment variable holding the access token.
    pub const ENV: &'static str = "GOLDAPI_KEY";
    /// Production base URL.
    pub const DEFAULT_BASE: &'static str = "https://www.goldapi.io";

    /// Build with an explicit token; `None` or blank leaves it unconfigured.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: clean_key(api_key),
            http: Endpoint::new(Self::KEY.as_str(), Self::DEFAULT_BASE),
        }
    }

    /// Build with the token read from `GOLDAPI_KEY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env_key(Self::ENV))
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

    /// Use a caller-provided `reqwest::Client`.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http.set_client(client);
        self
    }
}

impl AurumConnector for GoldApiConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "GoldAPI"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }
}

#[async_trait]
impl PriceProvider for GoldApiConnector {
    async fn spot_price(&self) -> Result<PricePayload, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::unconfigured(self.name()))?;
        let url = self.http.url("/api/XAU/USD", &[])?;
        let quote: GoldApiQuote = self
            .http
            .json(
                self.http
                    .get(url)
                    .header("x-access-token", key)
                    .header(reqwest::header::CONTENT_TYPE, "application/json"),
            )
            .await?;
        let payload = PricePayload::GoldApi(quote);
        payload.validate(self.name())?;
        Ok(payload)
    }
}
