use async_trait::async_trait;
use rust_decimal::Decimal;

use aurum_types::{PriceQuote, ProviderError, Topic, TopicTable};

use crate::connector::{AurumConnector, ChatPrompt, ChatProvider};
use crate::payload::ChatPayload;

/// Outcome of matching a message against the topic table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Matched topic id; `None` for the generic reply.
    pub topic: Option<String>,
    /// Reply text, never empty.
    pub text: String,
}

/// Rule-based chat responder over an ordered [`TopicTable`].
///
/// Matching is case-insensitive. The first topic (in table order) with any
/// matching keyword wins.
#[derive(Debug, Clone)]
pub struct RuleBasedChat {
    table: TopicTable,
}

impl Default for RuleBasedChat {
    fn default() -> Self {
        Self::new(TopicTable::default())
    }
}

fn contains_word(hay: &str, needle: &str) -> bool {
    hay.match_indices(needle).any(|(i, m)| {
        let before = hay[..i].chars().next_back();
        let after = hay[i + m.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn matches(topic: &Topic, lower: &str) -> bool {
    topic.keywords.iter().any(|k| {
        if topic.whole_word {
            contains_word(lower, k)
        } else {
            lower.contains(k.as_str())
        }
    })
}

fn signed(d: Decimal) -> String {
    if d.is_sign_negative() {
        format!("{d:.2}")
    } else {
        format!("+{d:.2}")
    }
}

fn live_price_text(q: &PriceQuote) -> String {
    let change = q.change_24h_abs;
    let direction = if change > Decimal::ZERO {
        "up"
    } else if change < Decimal::ZERO {
        "down"
    } else {
        "flat"
    };
    let status = if change > Decimal::ZERO {
        "Bullish trend"
    } else if change < Decimal::from(-10) {
        "Bearish trend"
    } else {
        "Sideways movement"
    };

    let mut out = format!(
        "**Current Gold Price**\n\n**${:.2} per oz** (USD)\n\n**24-Hour Performance:** {direction}\n\
         - Change: ${} ({}%)\n",
        q.spot_price_usd_per_oz,
        signed(change),
        signed(q.change_24h_pct),
    );
    if let (Some(lo), Some(hi)) = (q.day_low, q.day_high) {
        out.push_str(&format!("- Range: ${lo:.2} - ${hi:.2}\n"));
    }
    out.push_str(&format!(
        "\n**Market Status:** {status}\n\n*Source: {} at {}*",
        q.source,
        q.observed_at.format("%H:%M:%S")
    ));
    out
}

const THANKS_REPLY: &str =
    "You're welcome! Feel free to ask me anything else about gold investing or market analysis.";
const PRAISE_REPLY: &str = "I'm glad you found that helpful! Is there anything specific about gold investing you'd like to explore further?";
const SHORT_REPLY: &str = "I'd be happy to help with more specific questions about gold prices, investing, or market analysis. What would you like to know?";
const OVERVIEW_REPLY: &str = "I understand you're asking about gold-related topics. Here's what I can help with:\n\n\
- **Current gold prices and trends**\n\
- **Investment strategies and advice**\n\
- **Market analysis and factors**\n\
- **Buying guidance and tips**\n\n\
Could you rephrase your question or be more specific about what interests you?";

fn generic_reply(message: &str, lower: &str) -> &'static str {
    if lower.contains("thank") {
        THANKS_REPLY
    } else if ["good", "great", "excellent"].iter().any(|w| lower.contains(w)) {
        PRAISE_REPLY
    } else if message.split_whitespace().count() < 3 {
        SHORT_REPLY
    } else {
        OVERVIEW_REPLY
    }
}

impl RuleBasedChat {
    /// Responder over `table`. Keywords are lower-cased here, so tables
    /// loaded from configuration match regardless of case.
    #[must_use]
    pub fn new(mut table: TopicTable) -> Self {
        for topic in &mut table.topics {
            for k in &mut topic.keywords {
                *k = k.to_lowercase();
            }
        }
        Self { table }
    }

    /// The topic table in use.
    #[must_use]
    pub const fn table(&self) -> &TopicTable {
        &self.table
    }

    /// First matching topic for `message`, if any.
    #[must_use]
    pub fn match_topic(&self, message: &str) -> Option<&Topic> {
        let lower = message.to_lowercase();
        self.table.topics.iter().find(|t| matches(t, &lower))
    }

    /// Answer `prompt`. Infallible.
    #[must_use]
    pub fn answer(&self, prompt: &ChatPrompt) -> RuleMatch {
        let lower = prompt.message.to_lowercase();
        match self.table.topics.iter().find(|t| matches(t, &lower)) {
            Some(topic) => {
                let text = match (&prompt.quote, topic.live_price) {
                    (Some(q), true) => live_price_text(q),
                    _ => topic.reply.clone(),
                };
                RuleMatch {
                    topic: Some(topic.id.clone()),
                    text,
                }
            }
            None => RuleMatch {
                topic: None,
                text: generic_reply(&prompt.message, &lower).to_string(),
            },
        }
    }
}

#[async_trait]
impl ChatProvider for RuleBasedChat {
    async fn reply(&self, prompt: &ChatPrompt) -> Result<ChatPayload, ProviderError> {
        Ok(ChatPayload::RuleBased(self.answer(prompt)))
    }
}

impl AurumConnector for RuleBasedChat {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn vendor(&self) -> &'static str {
        "aurum"
    }

    fn is_fallback(&self) -> bool {
        true
    }

    fn as_chat_provider(&self) -> Option<&dyn ChatProvider> {
        Some(self)
    }
}
