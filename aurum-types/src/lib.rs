//! Aurum-specific data transfer objects, configuration primitives and errors.
#![warn(missing_docs)]

mod capability;
mod chat;
mod config;
mod connector;
mod error;
mod health;
mod price;
mod purchase;

pub use capability::Capability;
pub use chat::{ChatQuery, ChatReply, Headline, ReplySource};
pub use config::{AurumConfig, FallbackConfig, ReplyCacheConfig, Topic, TopicTable};
pub use connector::ConnectorKey;
pub use error::{AurumError, ProviderError};
pub use health::{HealthReport, HealthStatus, OverallStatus, ProviderHealth};
pub use price::{PriceQuote, PriceSource, TROY_OUNCE_GRAMS};
pub use purchase::{GoldType, PurchaseEstimate, PurchaseRequest, QuantityUnit};

/// Re-exported decimal type used for every monetary amount.
pub use rust_decimal::Decimal;
