use std::time::Duration;

use async_trait::async_trait;
use aurum_core::connector::{AurumConnector, ChatPrompt, ChatProvider};
use aurum_core::payload::GeminiResponse;
use aurum_core::{ChatPayload, ConnectorKey, ProviderError};
use serde::Serialize;

use crate::http::{Endpoint, clean_key, env_key};

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    candidate_count: u8,
    max_output_tokens: u16,
    temperature: f32,
    top_p: f32,
    top_k: u16,
    stop_sequences: [&'static str; 3],
}

const GENERATION: GenerationConfig = GenerationConfig {
    candidate_count: 1,
    max_output_tokens: 800,
    temperature: 0.3,
    top_p: 0.8,
    top_k: 40,
    stop_sequences: ["END_RESPONSE", "User:", "Human:"],
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: &'a GenerationConfig,
}

/// Google Gemini `generateContent` connector. Requires `GEMINI_API_KEY`.
#[derive(Debug, Clone)]
pub struct GeminiConnector {
    api_key: Option<String>,
    model: String,
    http: Endpoint,
}

impl GeminiConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("gemini");
    /// Environment variable holding the API key.
    pub const ENV: &'static str = "GEMINI_API_KEY";
    /// Production base URL.
    pub const DEFAULT_BASE: &'static str = "https://generativelanguage.googleapis.com";
    /// Model used unless overridden.
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";

    /// Build with an explicit key; `None` or blank leaves it unconfigured.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: clean_key(api_key),
            model: Self::DEFAULT_MODEL.to_string(),
            http: Endpoint::new(Self::KEY.as_str(), Self::DEFAULT_BASE),
        }
    }

    /// Build with the key read from `GEMINI_API_KEY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env_key(Self::ENV))
    }

    /// Use another model id.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
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

impl AurumConnector for GeminiConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Google"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn as_chat_provider(&self) -> Option<&dyn ChatProvider> {
        Some(self as &dyn ChatProvider)
    }
}

#[async_trait]
impl ChatProvider for GeminiConnector {
    async fn reply(&self, prompt: &ChatPrompt) -> Result<ChatPayload, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::unconfigured(self.name()))?;
        let url = self.http.url(
            &format!("/v1beta/models/{}:generateContent", self.model),
            &[("key", key)],
        )?;
        let text = prompt.render();
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &text }],
            }],
            generation_config: &GENERATION,
        };
        let resp: GeminiResponse = self.http.json(self.http.post(url).json(&body)).await?;
        let payload = ChatPayload::Gemini(resp);
        payload.validate(self.name(), &prompt.message)?;
        Ok(payload)
    }
}
