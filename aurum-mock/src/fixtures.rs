use aurum_core::{Headline, PriceQuote, PriceSource};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Fixed observation time used by every fixture (2024-01-02T15:04:05Z).
#[must_use]
pub fn observed_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_207_845, 0).unwrap_or_default()
}

/// Quote at `spot_cents` with a symmetric ±1% range and a +0.5% change.
#[must_use]
pub fn quote(spot_cents: i64) -> PriceQuote {
    let spot = Decimal::new(spot_cents, 2);
    let pct = Decimal::new(1, 2);
    PriceQuote {
        spot_price_usd_per_oz: spot,
        change_24h_abs: (spot * Decimal::new(5, 3)).round_dp(2),
        change_24h_pct: Decimal::new(50, 2),
        day_high: Some((spot * (Decimal::ONE + pct)).round_dp(2)),
        day_low: Some((spot * (Decimal::ONE - pct)).round_dp(2)),
        source: PriceSource::Provider("aurum-mock".to_string()),
        observed_at: observed_at(),
    }
}

/// Default mock quote: $2,034.50/oz.
#[must_use]
pub fn default_quote() -> PriceQuote {
    quote(203_450)
}

/// Canned generated reply, long enough to pass generated-reply checks.
pub const REPLY: &str = "Gold has historically served as a store of value during periods of \
high inflation and currency weakness. A modest allocation can reduce portfolio volatility.";

/// Three deterministic headlines.
#[must_use]
pub fn headlines() -> Vec<Headline> {
    [
        ("Gold edges higher as dollar softens", "Spot gold rose in early trade."),
        ("Central banks keep buying bullion", "Reserve managers added to holdings."),
        ("ETF outflows slow for gold funds", "Holdings stabilised this week."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, snippet))| Headline {
        title: title.to_string(),
        snippet: snippet.to_string(),
        link: format!("https://news.example.com/gold/{i}"),
        published: "2024-01-02T15:04:05Z".to_string(),
    })
    .collect()
}
