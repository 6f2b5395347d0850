//! Shared reqwest plumbing and the transport-to-`ProviderError` mapping.

use std::time::Duration;

use aurum_core::ProviderError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// Client-side deadline applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest slice of an error body kept in a `RemoteError`.
const MAX_ERROR_BODY: usize = 512;

const USER_AGENT: &str = concat!("aurum-http/", env!("CARGO_PKG_VERSION"));

fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// One provider's HTTP endpoint: a base URL and a client with a deadline.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    provider: &'static str,
    base: String,
    timeout: Duration,
    client: Client,
}

impl Endpoint {
    pub(crate) fn new(provider: &'static str, base: &str) -> Self {
        Self {
            provider,
            base: base.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: build_client(DEFAULT_TIMEOUT),
        }
    }

    pub(crate) fn set_base(&mut self, base: &str) {
        self.base = base.trim_end_matches('/').to_string();
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
        self.client = build_client(timeout);
    }

    pub(crate) fn set_client(&mut self, client: Client) {
        self.client = client;
    }

    /// `{base}{path}?{params}`.
    pub(crate) fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ProviderError> {
        Url::parse_with_params(&format!("{}{path}", self.base), params)
            .map_err(|e| ProviderError::remote(self.provider, None, format!("invalid url: {e}")))
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.client.post(url)
    }

    /// Send `req` and decode a 2xx JSON body into `T`.
    ///
    /// - client deadline exceeded: `Timeout`
    /// - other transport failure: `RemoteError` without status
    /// - non-2xx status: `RemoteError` with status and (truncated) body
    /// - body not matching `T`: `MalformedResponse`
    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, ProviderError> {
        let resp = req.send().await.map_err(|e| self.transport(e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport(e))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            provider = self.provider,
            status = status.as_u16(),
            bytes = body.len(),
            "provider responded"
        );

        if !status.is_success() {
            let body: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(ProviderError::remote(
                self.provider,
                Some(status.as_u16()),
                body,
            ));
        }
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::malformed(self.provider, e.to_string()))
    }

    /// Credentials travel in query strings, so the URL never reaches the error.
    fn transport(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::timeout(self.provider, self.timeout)
        } else {
            ProviderError::remote(self.provider, None, e.without_url().to_string())
        }
    }
}

/// Read a credential from the environment; empty values count as absent.
pub(crate) fn env_key(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalize an explicitly supplied credential the same way.
pub(crate) fn clean_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
