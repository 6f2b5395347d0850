use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::price::PriceSource;

/// Physical or digital form of gold being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldType {
    /// Bullion coins, quoted per troy ounce.
    Coin,
    /// Bars, quoted per troy ounce.
    Bar,
    /// Jewelry, quoted per gram.
    Jewelry,
    /// Digital gold, quoted per troy ounce.
    Digital,
}

impl GoldType {
    /// Dealer premium applied on top of spot.
    #[must_use]
    pub const fn premium(self) -> Decimal {
        match self {
            Self::Coin => Decimal::from_parts(5, 0, 0, false, 2),
            Self::Bar => Decimal::from_parts(3, 0, 0, false, 2),
            Self::Jewelry => Decimal::from_parts(30, 0, 0, false, 2),
            Self::Digital => Decimal::from_parts(25, 0, 0, false, 3),
        }
    }

    /// Unit the quantity is expressed in.
    #[must_use]
    pub const fn unit(self) -> QuantityUnit {
        match self {
            Self::Jewelry => QuantityUnit::Grams,
            Self::Coin | Self::Bar | Self::Digital => QuantityUnit::TroyOunces,
        }
    }

    /// Dealer the caller is redirected to.
    #[must_use]
    pub const fn redirect_url(self) -> &'static str {
        match self {
            Self::Coin => "https://www.apmex.com/",
            Self::Bar => "https://www.mmtc-pamp.com/",
            Self::Jewelry => "https://www.tanishq.co.in/",
            Self::Digital => "https://paytm.com/gold",
        }
    }

    /// Stable, lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Bar => "bar",
            Self::Jewelry => "jewelry",
            Self::Digital => "digital",
        }
    }
}

impl fmt::Display for GoldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of a purchase quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    /// Grams.
    Grams,
    /// Troy ounces.
    TroyOunces,
}

impl QuantityUnit {
    /// Short label for messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grams => "grams",
            Self::TroyOunces => "oz",
        }
    }
}

/// Inbound purchase estimate request. Nothing is bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Buyer name.
    pub user_name: String,
    /// Buyer email.
    pub email: String,
    /// Buyer phone.
    pub phone: String,
    /// Form of gold.
    pub gold_type: GoldType,
    /// Quantity in the unit implied by `gold_type`; must be positive.
    pub quantity: Decimal,
    /// Optional spending cap; must be non-negative.
    #[serde(default)]
    pub budget: Option<Decimal>,
    /// Delivery address.
    pub delivery_address: String,
}

/// Estimate and redirect target for a validated purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseEstimate {
    /// Reference id of the form `GOLD_<yyyymmdd>_<hhmmss>_<nnnn>`.
    pub purchase_id: String,
    /// Estimated total cost in USD, rounded to cents.
    pub estimated_cost: Decimal,
    /// Dealer URL for the requested gold type.
    pub redirect_url: String,
    /// Requested gold type.
    pub gold_type: GoldType,
    /// Requested quantity.
    pub quantity: Decimal,
    /// Unit of `quantity`.
    pub unit: QuantityUnit,
    /// Spot price used for the estimate.
    pub unit_price: Decimal,
    /// Source of the spot price.
    pub price_source: PriceSource,
    /// Whether the estimate fits the budget, when one was given.
    pub within_budget: Option<bool>,
    /// Human-readable summary.
    pub message: String,
}
