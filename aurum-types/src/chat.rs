use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::PriceQuote;

/// Inbound chat question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuery {
    /// Question text; must be non-empty after trimming.
    pub message: String,
    /// Optional opaque caller identifier, used only for reply caching.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl ChatQuery {
    /// Build a query without a user id.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user_id: None,
        }
    }

    /// Attach a user id.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Which path produced a chat reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplySource {
    /// An external AI provider answered.
    AiProvider,
    /// The local topic table answered.
    RuleBased,
}

/// A news item attached to a reply as supporting context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// Article title.
    pub title: String,
    /// Short description.
    pub snippet: String,
    /// Article URL.
    pub link: String,
    /// Publication timestamp as reported by the provider.
    pub published: String,
}

/// Canonical chat answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Reply text; never empty.
    pub text: String,
    /// Producing path.
    pub source: ReplySource,
    /// Topic id when the reply is rule-based and a topic matched.
    pub matched_topic: Option<String>,
    /// AI provider name when `source` is `AiProvider`.
    pub provider: Option<String>,
    /// Price quote used as context for the reply.
    pub quote: Option<PriceQuote>,
    /// Headlines fetched for news-flavored questions.
    #[serde(default)]
    pub headlines: Vec<Headline>,
    /// When the reply was produced.
    pub replied_at: DateTime<Utc>,
}
