use core::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grams per troy ounce, used when providers quote per gram.
pub const TROY_OUNCE_GRAMS: Decimal = Decimal::from_parts(311_035, 0, 0, false, 4);

/// Which path produced a price quote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum PriceSource {
    /// A named external provider.
    Provider(String),
    /// The local bounded random walk.
    Synthetic,
}

impl PriceSource {
    /// Label used when serializing the synthetic source.
    pub const SYNTHETIC: &'static str = "synthetic";

    /// Returns true when the quote came from the local fallback.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic)
    }

    /// Source label: provider name or `synthetic`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Provider(name) => name,
            Self::Synthetic => Self::SYNTHETIC,
        }
    }
}

impl From<PriceSource> for String {
    fn from(s: PriceSource) -> Self {
        s.as_str().to_string()
    }
}

impl From<String> for PriceSource {
    fn from(s: String) -> Self {
        if s == Self::SYNTHETIC {
            Self::Synthetic
        } else {
            Self::Provider(s)
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical gold spot quote in USD per troy ounce.
///
/// Invariants: `spot_price_usd_per_oz > 0`, and
/// `day_low <= spot_price_usd_per_oz <= day_high` whenever both bounds are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Spot price, USD per troy ounce.
    pub spot_price_usd_per_oz: Decimal,
    /// Absolute change over the last 24 hours.
    pub change_24h_abs: Decimal,
    /// Percent change over the last 24 hours.
    pub change_24h_pct: Decimal,
    /// Session high, when known.
    pub day_high: Option<Decimal>,
    /// Session low, when known.
    pub day_low: Option<Decimal>,
    /// Producing provider or `synthetic`.
    pub source: PriceSource,
    /// When the quote was observed.
    pub observed_at: DateTime<Utc>,
}

impl PriceQuote {
    /// Check the quote invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.spot_price_usd_per_oz <= Decimal::ZERO {
            return false;
        }
        match (self.day_low, self.day_high) {
            (Some(lo), Some(hi)) => {
                lo <= self.spot_price_usd_per_oz && self.spot_price_usd_per_oz <= hi
            }
            _ => true,
        }
    }
}
