use async_trait::async_trait;
use aurum_core::connector::{AurumConnector, ChatPrompt, ChatProvider, NewsProvider, PriceProvider};
use aurum_core::{ChatPayload, NewsPayload, PricePayload, ProviderError};

mod dynamic;
pub mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Special chat prompts drive failure paths: a message of `FAIL` returns a
/// remote error and `TIMEOUT` sleeps for 200ms before answering.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(
        message: &str,
        capability: &'static str,
    ) -> Result<(), ProviderError> {
        match message {
            "FAIL" => Err(ProviderError::remote(
                "aurum-mock",
                Some(500),
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl AurumConnector for MockConnector {
    fn name(&self) -> &'static str {
        "aurum-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }

    fn as_chat_provider(&self) -> Option<&dyn ChatProvider> {
        Some(self as &dyn ChatProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl PriceProvider for MockConnector {
    async fn spot_price(&self) -> Result<PricePayload, ProviderError> {
        Ok(PricePayload::Canonical(fixtures::default_quote()))
    }
}

#[async_trait]
impl ChatProvider for MockConnector {
    async fn reply(&self, prompt: &ChatPrompt) -> Result<ChatPayload, ProviderError> {
        Self::maybe_fail_or_timeout(prompt.message.trim(), "chat").await?;
        Ok(ChatPayload::Canonical(fixtures::REPLY.to_string()))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn headlines(&self, query: &str) -> Result<NewsPayload, ProviderError> {
        Self::maybe_fail_or_timeout(query.trim(), "news").await?;
        Ok(NewsPayload::Canonical(fixtures::headlines()))
    }
}
