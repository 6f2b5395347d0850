//! Configuration types shared by the orchestrator and the fallback generators.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of the synthetic price walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Anchor used before any provider has produced a price.
    pub baseline_price: Decimal,
    /// Maximum absolute perturbation, in percent of the anchor.
    pub max_perturbation_pct: Decimal,
    /// Half-width of the synthetic day range, in percent of spot.
    pub day_range_pct: Decimal,
    /// Fixed RNG seed for reproducible walks; entropy-seeded when `None`.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            baseline_price: Decimal::new(201_845, 2),
            max_perturbation_pct: Decimal::new(15, 1),
            day_range_pct: Decimal::ONE,
            seed: None,
        }
    }
}

/// One entry of the rule-based chat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable topic id reported as `matched_topic`.
    pub id: String,
    /// Lower-case keywords or phrases; any one triggers the topic.
    pub keywords: Vec<String>,
    /// Match keywords only on word boundaries (for short words like "hi").
    #[serde(default)]
    pub whole_word: bool,
    /// Render the live quote instead of `reply` when a quote is available.
    #[serde(default)]
    pub live_price: bool,
    /// Canned explanation.
    pub reply: String,
}

impl Topic {
    /// Build a substring-matched topic.
    pub fn new(id: impl Into<String>, keywords: &[&str], reply: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.iter().map(|k| k.to_ascii_lowercase()).collect(),
            whole_word: false,
            live_price: false,
            reply: reply.into(),
        }
    }

    /// Require word-boundary matches.
    #[must_use]
    pub const fn whole_word(mut self) -> Self {
        self.whole_word = true;
        self
    }

    /// Prefer the live quote over the canned text.
    #[must_use]
    pub const fn live_price(mut self) -> Self {
        self.live_price = true;
        self
    }
}

/// Ordered topic table; the first matching topic wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTable {
    /// Topics in match priority order.
    pub topics: Vec<Topic>,
}

impl TopicTable {
    /// Table with the given topics.
    #[must_use]
    pub const fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }
}

const PRICE_REPLY: &str = "**Gold Price Information**\n\n\
I'm currently unable to fetch real-time prices, but here's what you should know:\n\n\
- **Typical range:** $1,900 - $2,100 per ounce\n\
- **Daily volatility:** 1-3% is normal\n\
- **Key level:** watch support at $2,000\n\n\
Live price sources: GoldPrice.org, APMEX.com, local dealers.";

const INVESTMENT_REPLY: &str = "**Gold Investment Guide**\n\n\
Best options:\n\
1. **Gold ETFs** - easy and liquid (GLD, IAU)\n\
2. **Physical gold** - coins and small bars\n\
3. **Digital gold** - app-based fractional ownership\n\
4. **Mining stocks** - higher risk and reward\n\n\
Strategy: start with 5-10% of your portfolio and dollar-cost average your purchases.";

const PURITY_REPLY: &str = "**Gold Purity Guide**\n\n\
- **24K** = 99.9% pure (investment grade)\n\
- **22K** = 91.7% pure (jewelry)\n\
- **18K** = 75% pure (fine jewelry)\n\
- **14K** = 58.3% pure (everyday wear)\n\n\
Choose 24K (.999 fine) for investing, look for certified hallmarks and buy from reputable dealers.";

const ETF_REPLY: &str = "**Gold ETFs**\n\n\
Exchange-traded funds such as GLD and IAU track the gold price without storage or insurance costs.\n\
- Trade like shares during market hours\n\
- Expense ratios typically 0.25-0.40% per year\n\
- No physical delivery; you own fund units, not bullion";

const MARKET_REPLY: &str = "**Gold Market Analysis**\n\n\
Key price drivers:\n\
- **US dollar** - inverse relationship\n\
- **Interest rates** - higher real rates weigh on gold\n\
- **Inflation** - gold is a classic hedge\n\
- **Geopolitics** - safe-haven demand\n\n\
Central bank purchases and supply constraints from mines also support prices.";

const GREETING_REPLY: &str = "**Welcome to Gold Assistant!**\n\n\
I can help with real-time prices, investment strategies, market analysis and buying guidance.\n\n\
Try: \"What's the current gold price?\" or \"Should I invest in gold?\"";

const HELP_REPLY: &str = "**How I Can Help You**\n\n\
- **Price information:** spot prices, 24-hour changes, trends\n\
- **Investment guidance:** strategies, risk, allocation\n\
- **Buying advice:** where to buy, product types, purity\n\
- **Market insights:** price drivers and economic indicators\n\n\
Ask me anything about gold!";

impl Default for TopicTable {
    fn default() -> Self {
        Self::new(vec![
            Topic::new(
                "price",
                &["price", "cost", "current", "spot", "value", "how much"],
                PRICE_REPLY,
            )
            .live_price(),
            Topic::new(
                "investment",
                &["invest", "buy", "purchase", "investment", "should i"],
                INVESTMENT_REPLY,
            ),
            Topic::new("purity", &["purity", "karat", "quality", "hallmark"], PURITY_REPLY),
            Topic::new("etf", &["etf", "gld", "iau", "fund"], ETF_REPLY),
            Topic::new(
                "market",
                &["factors", "why", "market", "trend", "analysis"],
                MARKET_REPLY,
            ),
            Topic::new("greeting", &["hello", "hi", "hey", "greetings"], GREETING_REPLY)
                .whole_word(),
            Topic::new("help", &["help", "what can you do", "options"], HELP_REPLY),
        ])
    }
}

/// Optional chat reply cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyCacheConfig {
    /// Time-to-live of a cached reply.
    pub ttl: Duration,
    /// Maximum number of cached replies.
    pub max_entries: u64,
}

impl Default for ReplyCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_entries: 1_024,
        }
    }
}

/// Global configuration for the `Aurum` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AurumConfig {
    /// Connector names in price priority order; unlisted connectors follow in
    /// registration order.
    pub price_priority: Vec<String>,
    /// Connector names in chat priority order.
    pub chat_priority: Vec<String>,
    /// Connector names in news priority order.
    pub news_priority: Vec<String>,
    /// Bounded wait applied to every provider attempt.
    pub provider_timeout: Duration,
    /// Synthetic price parameters.
    pub fallback: FallbackConfig,
    /// Rule-based chat table.
    pub topics: TopicTable,
    /// Maximum accepted chat message length, in characters.
    pub max_message_chars: usize,
    /// Reply cache; disabled when `None`.
    pub reply_cache: Option<ReplyCacheConfig>,
}

impl Default for AurumConfig {
    fn default() -> Self {
        Self {
            price_priority: Vec::new(),
            chat_priority: Vec::new(),
            news_priority: Vec::new(),
            provider_timeout: Duration::from_secs(5),
            fallback: FallbackConfig::default(),
            topics: TopicTable::default(),
            max_message_chars: 1_000,
            reply_cache: None,
        }
    }
}
