//! One exhaustive mapping per capability from native payloads into the
//! canonical result types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use aurum_types::{
    ChatReply, Headline, PriceQuote, PriceSource, ProviderError, ReplySource, TROY_OUNCE_GRAMS,
};

use crate::connector::ChatPrompt;
use crate::payload::{ChatPayload, NewsPayload, PricePayload};

const CENTS: u32 = 2;

fn dec(provider: &str, field: &str, v: f64) -> Result<Decimal, ProviderError> {
    Decimal::from_f64_retain(v)
        .ok_or_else(|| ProviderError::malformed(provider, format!("{field} is not representable")))
}

fn dec_opt(provider: &str, field: &str, v: Option<f64>) -> Result<Option<Decimal>, ProviderError> {
    v.map(|x| dec(provider, field, x).map(|d| d.round_dp(CENTS)))
        .transpose()
}

fn mul(provider: &str, field: &str, a: Decimal, b: Decimal) -> Result<Decimal, ProviderError> {
    a.checked_mul(b)
        .ok_or_else(|| ProviderError::malformed(provider, format!("{field} is out of range")))
}

/// Widen an inconsistent range so that `low <= spot <= high`.
fn widen(
    spot: Decimal,
    low: Option<Decimal>,
    high: Option<Decimal>,
) -> (Option<Decimal>, Option<Decimal>) {
    (low.map(|l| l.min(spot)), high.map(|h| h.max(spot)))
}

/// Map a validated price payload into a [`PriceQuote`].
///
/// # Errors
/// Returns `MalformedResponse` when a numeric field cannot be represented
/// as a decimal or the spot is not positive after rounding.
pub fn price(
    payload: PricePayload,
    provider: &str,
    observed_at: DateTime<Utc>,
) -> Result<PriceQuote, ProviderError> {
    let quote = match payload {
        PricePayload::GoldApi(q) => {
            let spot = dec(provider, "price", q.price)?.round_dp(CENTS);
            let (day_low, day_high) = widen(
                spot,
                dec_opt(provider, "low_price", q.low_price)?,
                dec_opt(provider, "high_price", q.high_price)?,
            );
            PriceQuote {
                spot_price_usd_per_oz: spot,
                change_24h_abs: dec_opt(provider, "ch", q.ch)?.unwrap_or_default(),
                change_24h_pct: dec_opt(provider, "chp", q.chp)?.unwrap_or_default(),
                day_high,
                day_low,
                source: PriceSource::Provider(provider.to_string()),
                observed_at,
            }
        }
        PricePayload::CoinGecko(p) => {
            let field = "gold.usd";
            let per_gram = dec(provider, field, p.gold.usd)?;
            let per_oz = mul(provider, field, per_gram, TROY_OUNCE_GRAMS)?;
            let pct = dec_opt(provider, "gold.usd_24h_change", p.gold.usd_24h_change)?
                .unwrap_or_default();
            let one_pct = Decimal::new(1, 2);
            let high = mul(provider, field, per_oz, Decimal::ONE + one_pct)?;
            let low = mul(provider, field, per_oz, Decimal::ONE - one_pct)?;
            let change = mul(provider, field, pct, per_oz)? / Decimal::ONE_HUNDRED;
            PriceQuote {
                spot_price_usd_per_oz: per_oz.round_dp(CENTS),
                change_24h_abs: change.round_dp(CENTS),
                change_24h_pct: pct,
                day_high: Some(high.round_dp(CENTS)),
                day_low: Some(low.round_dp(CENTS)),
                source: PriceSource::Provider(provider.to_string()),
                observed_at,
            }
        }
        PricePayload::Synthetic(w) => PriceQuote {
            spot_price_usd_per_oz: w.spot,
            change_24h_abs: w.change_abs,
            change_24h_pct: w.change_pct,
            day_high: Some(w.day_high),
            day_low: Some(w.day_low),
            source: PriceSource::Synthetic,
            observed_at,
        },
        PricePayload::Canonical(mut q) => {
            q.spot_price_usd_per_oz = q.spot_price_usd_per_oz.round_dp(CENTS);
            let (lo, hi) = widen(q.spot_price_usd_per_oz, q.day_low, q.day_high);
            q.day_low = lo;
            q.day_high = hi;
            q.source = PriceSource::Provider(provider.to_string());
            q.observed_at = observed_at;
            q
        }
    };

    if quote.spot_price_usd_per_oz <= Decimal::ZERO {
        return Err(ProviderError::malformed(provider, "spot price rounds to zero"));
    }
    Ok(quote)
}

/// Map a validated chat payload into a [`ChatReply`] carrying the prompt's
/// context.
///
/// # Errors
/// Returns `MalformedResponse` when a generated payload carries no text.
pub fn chat(
    payload: ChatPayload,
    provider: &str,
    prompt: &ChatPrompt,
    replied_at: DateTime<Utc>,
) -> Result<ChatReply, ProviderError> {
    let (text, source, matched_topic) = match payload {
        ChatPayload::Gemini(r) => (
            r.first_text()
                .ok_or_else(|| ProviderError::malformed(provider, "no candidate text"))?
                .to_string(),
            ReplySource::AiProvider,
            None,
        ),
        ChatPayload::Canonical(t) => (t.trim().to_string(), ReplySource::AiProvider, None),
        ChatPayload::RuleBased(m) => (m.text, ReplySource::RuleBased, m.topic),
    };
    if text.is_empty() {
        return Err(ProviderError::malformed(provider, "empty reply"));
    }

    Ok(ChatReply {
        text,
        provider: (source == ReplySource::AiProvider).then(|| provider.to_string()),
        source,
        matched_topic,
        quote: prompt.quote.clone(),
        headlines: prompt.headlines.clone(),
        replied_at,
    })
}

/// Map a news payload into headlines. Articles without a title are dropped.
#[must_use]
pub fn news(payload: NewsPayload) -> Vec<Headline> {
    match payload {
        NewsPayload::NewsApi(r) => r
            .articles
            .into_iter()
            .filter_map(|a| {
                let title = a.title.filter(|t| !t.trim().is_empty())?;
                Some(Headline {
                    title,
                    snippet: a.description.unwrap_or_default(),
                    link: a.url.unwrap_or_default(),
                    published: a.published_at.unwrap_or_default(),
                })
            })
            .collect(),
        NewsPayload::Canonical(h) => h,
    }
}
