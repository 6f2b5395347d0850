use async_trait::async_trait;

use aurum_types::{ConnectorKey, Headline, PriceQuote, ProviderError};

use crate::payload::{ChatPayload, NewsPayload, PricePayload};

/// Question and context handed to chat providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    /// Trimmed question text.
    pub message: String,
    /// Current quote, when one was obtained for context.
    pub quote: Option<PriceQuote>,
    /// Recent headlines, possibly empty.
    pub headlines: Vec<Headline>,
}

impl ChatPrompt {
    /// Prompt with no context.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            quote: None,
            headlines: Vec::new(),
        }
    }

    /// Render the focused expert prompt sent to generative providers.
    #[must_use]
    pub fn render(&self) -> String {
        let price_info = self
            .quote
            .as_ref()
            .map(|q| {
                let sign = if q.change_24h_abs < rust_decimal::Decimal::ZERO {
                    ""
                } else {
                    "+"
                };
                format!(
                    "Current gold: ${}/oz ({sign}{})",
                    q.spot_price_usd_per_oz, q.change_24h_abs
                )
            })
            .unwrap_or_default();

        let mut out = format!(
            "You are a gold investment expert. Answer this question briefly and helpfully:\n\n\
             Question: \"{}\"\n{price_info}\n",
            self.message
        );
        if !self.headlines.is_empty() {
            out.push_str("\nRecent headlines:\n");
            for h in &self.headlines {
                out.push_str("- ");
                out.push_str(&h.title);
                out.push('\n');
            }
        }
        out.push_str(
            "\nKeep your response under 300 words, be specific and helpful. Don't repeat the question.",
        );
        out
    }
}

/// Focused role trait for connectors that quote the gold spot price.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the provider-native spot payload.
    async fn spot_price(&self) -> Result<PricePayload, ProviderError>;
}

/// Focused role trait for connectors that answer chat questions.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Produce a provider-native reply for the prompt.
    async fn reply(&self, prompt: &ChatPrompt) -> Result<ChatPayload, ProviderError>;
}

/// Focused role trait for connectors that search gold news.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch headlines related to `query`.
    async fn headlines(&self, query: &str) -> Result<NewsPayload, ProviderError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait AurumConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g. "goldapi", "gemini").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether the credential this connector needs is present.
    ///
    /// Unconfigured connectors are skipped without an attempt and without a
    /// health record.
    fn is_configured(&self) -> bool {
        true
    }

    /// Whether this connector is a local, infallible fallback generator.
    fn is_fallback(&self) -> bool {
        false
    }

    /// Advertise price capability by returning a usable trait object reference when supported.
    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        None
    }

    /// Advertise chat capability by returning a usable trait object reference when supported.
    fn as_chat_provider(&self) -> Option<&dyn ChatProvider> {
        None
    }

    /// Advertise news capability by returning a usable trait object reference when supported.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}
