use aurum::{Aurum, AurumError, Capability, GoldType};

use crate::helpers::{price_ok, purchase, usd};

#[tokio::test]
async fn negative_quantity_is_rejected_before_pricing() {
    let (p, p_ctl) = price_ok("p", 200_000).await;
    let aurum = Aurum::builder().with_connector(p).build().unwrap();

    let err = aurum
        .estimate_purchase(purchase(GoldType::Coin, usd("-1")))
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("quantity"));
    assert!(matches!(err, AurumError::Validation { .. }));
    assert_eq!(p_ctl.calls(Capability::Price), 0);
}

#[tokio::test]
async fn first_invalid_field_is_reported() {
    let aurum = Aurum::builder().build().unwrap();

    let mut r = purchase(GoldType::Bar, usd("1"));
    r.email = "not-an-email".into();
    r.quantity = usd("0");
    let err = aurum.estimate_purchase(r).await.unwrap_err();
    assert_eq!(err.field(), Some("email"));

    let mut r = purchase(GoldType::Bar, usd("1"));
    r.phone = "call me".into();
    let err = aurum.estimate_purchase(r).await.unwrap_err();
    assert_eq!(err.field(), Some("phone"));

    let mut r = purchase(GoldType::Bar, usd("1"));
    r.budget = Some(usd("-5"));
    let err = aurum.estimate_purchase(r).await.unwrap_err();
    assert_eq!(err.field(), Some("budget"));

    let mut r = purchase(GoldType::Bar, usd("1"));
    r.delivery_address = "  ".into();
    let err = aurum.estimate_purchase(r).await.unwrap_err();
    assert_eq!(err.field(), Some("delivery_address"));
}

#[tokio::test]
async fn rejected_request_leaves_health_untouched() {
    let (p, _) = price_ok("p", 200_000).await;
    let aurum = Aurum::builder().with_connector(p).build().unwrap();

    let mut r = purchase(GoldType::Coin, usd("1"));
    r.user_name = String::new();
    assert!(aurum.estimate_purchase(r).await.is_err());
    assert!(aurum.health().iter().all(|h| h.attempts == 0));
}

#[tokio::test]
async fn quantity_too_large_to_price_is_rejected() {
    let (p, _) = price_ok("p", 200_000).await;
    let aurum = Aurum::builder().with_connector(p).build().unwrap();

    let err = aurum
        .estimate_purchase(purchase(GoldType::Coin, usd("10000000000000000000000000000")))
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some("quantity"));
}
