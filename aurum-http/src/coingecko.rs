use std::time::Duration;

use async_trait::async_trait;
use aurum_core::connector::{AurumConnector, PriceProvider};
use aurum_core::payload::CoinGeckoSimplePrice;
use aurum_core::{ConnectorKey, PricePayload, ProviderError};

use crate::http::{Endpoint, clean_key, env_key};

/// CoinGecko `simple/price` connector for the `gold` id.
///
/// Works without a key; `COINGECKO_API_KEY` is sent as the demo-key header
/// when present. Quotes are per gram and converted to troy ounces during
/// normalization.
#[derive(Debug, Clone)]
pub struct CoinGeckoConnector {
    api_key: Option<String>,
    http: Endpoint,
}

impl CoinGeckoConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("coingecko");
    /// Environment variable holding the optional demo key.
    pub const ENV: &'static str = "COINGECKO_API_KEY";
    /// Production base URL.
    pub const DEFAULT_BASE: &'static str = "https://api.coingecko.com";

    /// Build with an optional demo key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: clean_key(api_key),
            http: Endpoint::new(Self::KEY.as_str(), Self::DEFAULT_BASE),
        }
    }

    /// Build with the optional key read from `COINGECKO_API_KEY`.
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
}

impl Default for CoinGeckoConnector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AurumConnector for CoinGeckoConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "CoinGecko"
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoConnector {
    async fn spot_price(&self) -> Result<PricePayload, ProviderError> {
        let url = self.http.url(
            "/api/v3/simple/price",
            &[
                ("ids", "gold"),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ],
        )?;
        let mut req = self.http.get(url);
        if let Some(key) = &self.api_key {
            req = req.header("x-cg-demo-api-key", key);
        }
        let body: CoinGeckoSimplePrice = self.http.json(req).await?;
        let payload = PricePayload::CoinGecko(body);
        payload.validate(self.name())?;
        Ok(payload)
    }
}
