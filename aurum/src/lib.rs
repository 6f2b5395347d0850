//! Aurum fetches a gold spot price and answers gold questions through ordered
//! chains of external providers, and never fails to answer.
//!
//! Overview
//! - Routes requests to connectors that implement the `aurum_core` contracts.
//! - Orders each capability's providers by a configured priority list; unlisted
//!   providers follow in registration order.
//! - Bounds every attempt by a per-provider timeout and moves on at the first error.
//! - Terminates the price chain with a bounded synthetic walk and the chat chain with
//!   a rule-based topic table, so `price()` and `chat()` always produce a result.
//! - Keeps a per-provider health record updated after every attempt.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use aurum::{Aurum, Capability, ChatQuery};
//! use aurum_http::{CoinGeckoConnector, GeminiConnector, GoldApiConnector};
//!
//! let goldapi = Arc::new(GoldApiConnector::from_env());
//! let coingecko = Arc::new(CoinGeckoConnector::from_env());
//!
//! let aurum = Aurum::builder()
//!     .with_connector(goldapi.clone())
//!     .with_connector(coingecko.clone())
//!     .with_connector(Arc::new(GeminiConnector::from_env()))
//!     .prefer_for(Capability::Price, &[goldapi, coingecko])
//!     .build()?;
//!
//! let quote = aurum.price().await;
//! let reply = aurum.chat(ChatQuery::new("Should I buy gold now?")).await?;
//! for h in aurum.health() {
//!     println!("{} {:?}", h.provider_name, h.last_status);
//! }
//! ```
//!
//! See `aurum/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod cache;
pub(crate) mod core;
mod health;
mod router;

pub use crate::core::{Aurum, AurumBuilder};

// Re-export core types for convenience
pub use aurum_core::{
    AurumConfig, AurumConnector, AurumError, Capability, ChatQuery, ChatReply, FallbackConfig,
    GoldType, HealthReport, HealthStatus, Headline, OverallStatus, PriceQuote, PriceSource,
    ProviderError, ProviderHealth, PurchaseEstimate, PurchaseRequest, QuantityUnit,
    ReplyCacheConfig, ReplySource, TROY_OUNCE_GRAMS, Topic, TopicTable,
};
