// Shared fixtures so tests can `use crate::helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;

use aurum::{
    AurumConnector, Capability, GoldType, PriceQuote, ProviderError, ProviderHealth,
    PurchaseRequest,
};
use aurum_core::{ChatPayload, NewsPayload, PricePayload};
use aurum_mock::{DynamicMockConnector, DynamicMockController, MockBehavior, fixtures};
use rust_decimal::Decimal;

pub type Mock = (Arc<dyn AurumConnector>, DynamicMockController);

/// Build a USD amount from a literal without unwrap noise in tests.
pub fn usd(amount: &str) -> Decimal {
    amount.parse().unwrap()
}

/// Price-only mock answering with a canonical quote at `spot_cents`.
pub async fn price_ok(name: &'static str, spot_cents: i64) -> Mock {
    let (c, ctl) = DynamicMockConnector::new_with_controller(name, &[Capability::Price]);
    ctl.set_price_behavior(MockBehavior::Return(PricePayload::Canonical(
        fixtures::quote(spot_cents),
    )))
    .await;
    (c, ctl)
}

/// Price-only mock that never answers.
pub async fn price_hang(name: &'static str) -> Mock {
    let (c, ctl) = DynamicMockConnector::new_with_controller(name, &[Capability::Price]);
    ctl.set_price_behavior(MockBehavior::Hang).await;
    (c, ctl)
}

/// Price-only mock failing with a 500.
pub async fn price_fail(name: &'static str) -> Mock {
    let (c, ctl) = DynamicMockConnector::new_with_controller(name, &[Capability::Price]);
    ctl.set_price_behavior(MockBehavior::Fail(server_error(name)))
        .await;
    (c, ctl)
}

/// Chat-only mock answering with `text`.
pub async fn chat_ok(name: &'static str, text: &str) -> Mock {
    let (c, ctl) = DynamicMockConnector::new_with_controller(name, &[Capability::Chat]);
    ctl.set_chat_behavior(MockBehavior::Return(ChatPayload::Canonical(text.to_string())))
        .await;
    (c, ctl)
}

/// News-only mock answering with the fixture headlines.
pub async fn news_ok(name: &'static str) -> Mock {
    let (c, ctl) = DynamicMockConnector::new_with_controller(name, &[Capability::News]);
    ctl.set_news_behavior(MockBehavior::Return(NewsPayload::Canonical(
        fixtures::headlines(),
    )))
    .await;
    (c, ctl)
}

pub fn server_error(name: &str) -> ProviderError {
    ProviderError::remote(name, Some(500), "internal error")
}

/// Health record for `(name, capability)`; panics when missing.
pub fn record<'a>(
    health: &'a [ProviderHealth],
    name: &str,
    capability: Capability,
) -> &'a ProviderHealth {
    health
        .iter()
        .find(|h| h.provider_name == name && h.capability == capability)
        .unwrap_or_else(|| panic!("no health record for {name}/{capability}"))
}

/// Whether `q.spot` lies within `pct` percent of `center`.
pub fn within_pct(q: &PriceQuote, center: Decimal, pct: Decimal) -> bool {
    let band = (center * pct / Decimal::ONE_HUNDRED).round_dp(2);
    let spot = q.spot_price_usd_per_oz;
    spot >= center - band && spot <= center + band
}

/// A valid purchase request for `quantity` of `gold_type`.
pub fn purchase(gold_type: GoldType, quantity: Decimal) -> PurchaseRequest {
    PurchaseRequest {
        user_name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        phone: "+1 (555) 123-4567".into(),
        gold_type,
        quantity,
        budget: None,
        delivery_address: "1 Harbor Way, Arlington".into(),
    }
}
