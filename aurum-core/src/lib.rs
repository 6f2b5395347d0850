//! aurum-core
//!
//! Core contracts shared across the aurum ecosystem.
//!
//! - `connector`: the `AurumConnector` trait and the price/chat/news role traits.
//! - `payload`: provider-native payload variants and their boundary validation.
//! - `normalize`: one exhaustive mapping per capability into the canonical types.
//! - `fallback`: the synthetic price walk and the rule-based chat table, both
//!   exposed as connectors so they terminate a provider chain.
//! - `validate`: request validation performed before any provider is contacted.
//!
//! Async runtime (Tokio)
//! ---------------------
//! [`attempt`] bounds provider futures with `tokio::time::timeout`, so callers
//! must run under a Tokio 1.x runtime with the time driver enabled.
#![warn(missing_docs)]

/// Bounded single-attempt helper.
pub mod attempt;
/// Connector capability traits and the primary `AurumConnector` interface.
pub mod connector;
/// Local generators used when no provider succeeds.
pub mod fallback;
/// Mapping of native payloads into canonical results.
pub mod normalize;
/// Provider-native payload shapes.
pub mod payload;
/// Request validation.
pub mod validate;

pub use attempt::attempt;
pub use connector::{AurumConnector, ChatPrompt, ChatProvider, NewsProvider, PriceProvider};
pub use fallback::{RuleBasedChat, RuleMatch, SyntheticPrice, SyntheticWalk};
pub use payload::{ChatPayload, NewsPayload, PricePayload};

pub use aurum_types::*;
