//! Local generators that terminate every provider chain.
//!
//! Both are ordinary connectors: [`SyntheticPrice`] implements
//! [`PriceProvider`](crate::PriceProvider) and [`RuleBasedChat`] implements
//! [`ChatProvider`](crate::ChatProvider). Neither ever returns an error.

mod chat;
mod price;

pub use chat::{RuleBasedChat, RuleMatch};
pub use price::{SyntheticPrice, SyntheticWalk};
