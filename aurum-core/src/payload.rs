//! Provider-native payload shapes.
//!
//! Each provider gets its own concrete variant so normalization is an
//! exhaustive match instead of ad-hoc field probing. Adapters call the
//! `validate` methods before returning `Ok`, so normalization can assume a
//! structurally valid payload.

use aurum_types::{Headline, PriceQuote, ProviderError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fallback::{RuleMatch, SyntheticWalk};

/// GoldAPI `/api/XAU/USD` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldApiQuote {
    /// Spot price per troy ounce.
    pub price: f64,
    /// Absolute change.
    #[serde(default)]
    pub ch: Option<f64>,
    /// Percent change.
    #[serde(default)]
    pub chp: Option<f64>,
    /// Session high.
    #[serde(default)]
    pub high_price: Option<f64>,
    /// Session low.
    #[serde(default)]
    pub low_price: Option<f64>,
}

/// CoinGecko `simple/price` entry for gold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinGeckoEntry {
    /// Price per gram in USD.
    pub usd: f64,
    /// 24h change in percent.
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}

/// CoinGecko `simple/price?ids=gold` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinGeckoSimplePrice {
    /// Gold entry; absent ids make the body malformed.
    pub gold: CoinGeckoEntry,
}

/// Native price payload per provider.
#[derive(Debug, Clone, PartialEq)]
pub enum PricePayload {
    /// GoldAPI quote, USD per troy ounce.
    GoldApi(GoldApiQuote),
    /// CoinGecko quote, USD per gram.
    CoinGecko(CoinGeckoSimplePrice),
    /// Local bounded random walk.
    Synthetic(SyntheticWalk),
    /// Already canonical (in-process providers and mocks).
    Canonical(PriceQuote),
}

fn finite_positive(provider: &str, field: &str, v: f64) -> Result<(), ProviderError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ProviderError::malformed(
            provider,
            format!("{field} must be a positive number, got {v}"),
        ))
    }
}

fn finite_opt(provider: &str, field: &str, v: Option<f64>) -> Result<(), ProviderError> {
    match v {
        Some(x) if !x.is_finite() => Err(ProviderError::malformed(
            provider,
            format!("{field} is not finite"),
        )),
        _ => Ok(()),
    }
}

impl PricePayload {
    /// Reject payloads whose numeric fields cannot produce a valid quote.
    ///
    /// # Errors
    /// Returns `MalformedResponse` tagged with `provider`.
    pub fn validate(&self, provider: &str) -> Result<(), ProviderError> {
        match self {
            Self::GoldApi(q) => {
                finite_positive(provider, "price", q.price)?;
                finite_opt(provider, "ch", q.ch)?;
                finite_opt(provider, "chp", q.chp)?;
                finite_opt(provider, "high_price", q.high_price)?;
                finite_opt(provider, "low_price", q.low_price)
            }
            Self::CoinGecko(p) => {
                finite_positive(provider, "gold.usd", p.gold.usd)?;
                finite_opt(provider, "gold.usd_24h_change", p.gold.usd_24h_change)
            }
            Self::Synthetic(w) => {
                if w.spot > Decimal::ZERO && w.anchor > Decimal::ZERO {
                    Ok(())
                } else {
                    Err(ProviderError::malformed(
                        provider,
                        "synthetic walk left the positive range",
                    ))
                }
            }
            Self::Canonical(q) => {
                if q.spot_price_usd_per_oz > Decimal::ZERO {
                    Ok(())
                } else {
                    Err(ProviderError::malformed(provider, "spot price must be positive"))
                }
            }
        }
    }
}

/// One text part of a Gemini candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Generated text.
    #[serde(default)]
    pub text: String,
}

/// Content of a Gemini candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Ordered text parts.
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A Gemini candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiCandidate {
    /// Candidate content.
    pub content: GeminiContent,
}

/// Gemini `generateContent` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiResponse {
    /// Candidates; the first one is used.
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate, trimmed.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim())
            .filter(|t| !t.is_empty())
    }
}

/// Native chat payload per provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatPayload {
    /// Gemini generation result.
    Gemini(GeminiResponse),
    /// Local topic-table answer.
    RuleBased(RuleMatch),
    /// Plain generated text (in-process providers and mocks).
    Canonical(String),
}

/// Accepted length window for generated replies, in characters (exclusive).
pub const GENERATED_REPLY_CHARS: (usize, usize) = (50, 1_500);

impl ChatPayload {
    /// Reject generated replies that are empty, out of the accepted length
    /// window, or that merely echo the question.
    ///
    /// # Errors
    /// Returns `MalformedResponse` tagged with `provider`.
    pub fn validate(&self, provider: &str, question: &str) -> Result<(), ProviderError> {
        let text = match self {
            Self::RuleBased(m) => {
                return if m.text.trim().is_empty() {
                    Err(ProviderError::malformed(provider, "empty rule-based reply"))
                } else {
                    Ok(())
                };
            }
            Self::Gemini(r) => r
                .first_text()
                .ok_or_else(|| ProviderError::malformed(provider, "no candidate text"))?,
            Self::Canonical(t) => t.trim(),
        };

        let len = text.chars().count();
        let (min, max) = GENERATED_REPLY_CHARS;
        if len <= min || len >= max {
            return Err(ProviderError::malformed(
                provider,
                format!("reply length {len} outside ({min}, {max})"),
            ));
        }

        let q: String = question.trim().to_lowercase().chars().take(20).collect();
        if !q.is_empty() && text.to_lowercase().starts_with(&q) {
            return Err(ProviderError::malformed(provider, "reply echoes the question"));
        }
        Ok(())
    }
}

/// A NewsAPI article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsApiArticle {
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Publication timestamp.
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// NewsAPI `/v2/everything` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsApiResponse {
    /// Matched articles.
    pub articles: Vec<NewsApiArticle>,
}

/// Native news payload per provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsPayload {
    /// NewsAPI result.
    NewsApi(NewsApiResponse),
    /// Already canonical (mocks).
    Canonical(Vec<Headline>),
}
