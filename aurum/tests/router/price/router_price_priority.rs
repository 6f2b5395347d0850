use aurum::{Aurum, Capability, PriceSource};

use crate::helpers::{price_fail, price_ok, usd};

#[tokio::test]
async fn prefer_for_orders_providers_regardless_of_registration() {
    let (a, a_ctl) = price_ok("a", 100_000).await;
    let (b, b_ctl) = price_ok("b", 200_000).await;

    let aurum = Aurum::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .prefer_for(Capability::Price, &[b, a])
        .build()
        .unwrap();

    let q = aurum.price().await;
    assert_eq!(q.spot_price_usd_per_oz, usd("2000.00"));
    assert_eq!(q.source, PriceSource::Provider("b".into()));
    assert_eq!(b_ctl.calls(Capability::Price), 1);
    assert_eq!(a_ctl.calls(Capability::Price), 0);
}

#[tokio::test]
async fn registration_order_applies_without_priority() {
    let (a, _) = price_ok("a", 100_000).await;
    let (b, b_ctl) = price_ok("b", 200_000).await;

    let aurum = Aurum::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let q = aurum.price().await;
    assert_eq!(q.source, PriceSource::Provider("a".into()));
    assert_eq!(b_ctl.calls(Capability::Price), 0);
}

#[tokio::test]
async fn unlisted_providers_follow_listed_ones_in_registration_order() {
    let (a, a_ctl) = price_ok("a", 100_000).await;
    let (b, b_ctl) = price_fail("b").await;
    let (c, c_ctl) = price_ok("c", 300_000).await;

    let aurum = Aurum::builder()
        .with_connector(a)
        .with_connector(b)
        .with_connector(c)
        .prefer_names(Capability::Price, &["b"])
        .build()
        .unwrap();

    let q = aurum.price().await;
    assert_eq!(q.source, PriceSource::Provider("a".into()));
    assert_eq!(b_ctl.calls(Capability::Price), 1);
    assert_eq!(a_ctl.calls(Capability::Price), 1);
    assert_eq!(c_ctl.calls(Capability::Price), 0);
}

#[tokio::test]
async fn unknown_and_duplicate_names_are_dropped_at_build() {
    let (a, _) = price_ok("a", 100_000).await;
    let (b, _) = price_ok("b", 200_000).await;

    let aurum = Aurum::builder()
        .with_connector(a)
        .with_connector(b)
        .prefer_names(Capability::Price, &["ghost", "b", "b", "a"])
        .build()
        .unwrap();

    assert_eq!(aurum.config().price_priority, vec!["b".to_string(), "a".to_string()]);
    let q = aurum.price().await;
    assert_eq!(q.source, PriceSource::Provider("b".into()));
}

#[tokio::test]
async fn same_configuration_picks_same_provider_every_time() {
    let (a, _) = price_ok("a", 100_000).await;
    let (b, _) = price_ok("b", 200_000).await;

    let aurum = Aurum::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .prefer_for(Capability::Price, &[b, a])
        .build()
        .unwrap();

    for _ in 0..5 {
        assert_eq!(aurum.price().await.source, PriceSource::Provider("b".into()));
    }
}

#[tokio::test]
async fn connectors_without_price_capability_are_not_in_the_chain() {
    let (chat, chat_ctl) = crate::helpers::chat_ok("chat-only", aurum_mock::fixtures::REPLY).await;
    let (p, _) = price_ok("p", 200_000).await;

    let aurum = Aurum::builder()
        .with_connector(chat)
        .with_connector(p)
        .build()
        .unwrap();

    assert_eq!(aurum.price().await.source, PriceSource::Provider("p".into()));
    assert_eq!(chat_ctl.total_calls(), 0);
}
