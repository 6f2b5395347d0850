use aurum::{Aurum, GoldType, PriceSource, QuantityUnit};

use crate::helpers::{price_ok, purchase, usd};

#[tokio::test]
async fn coin_estimate_uses_provider_spot_and_premium() {
    let (p, _) = price_ok("p", 200_000).await;
    let aurum = Aurum::builder().with_connector(p).build().unwrap();

    let e = aurum
        .estimate_purchase(purchase(GoldType::Coin, usd("2")))
        .await
        .unwrap();
    assert_eq!(e.estimated_cost, usd("4200.00"));
    assert_eq!(e.unit_price, usd("2000.00"));
    assert_eq!(e.unit, QuantityUnit::TroyOunces);
    assert_eq!(e.price_source, PriceSource::Provider("p".into()));
    assert_eq!(e.redirect_url, GoldType::Coin.redirect_url());
    assert_eq!(e.within_budget, None);
    assert!(e.purchase_id.starts_with("GOLD_"));
    assert!(e.message.contains("$4200.00"), "{}", e.message);
}

#[tokio::test]
async fn jewelry_is_quoted_in_grams() {
    let (p, _) = price_ok("p", 200_000).await;
    let aurum = Aurum::builder().with_connector(p).build().unwrap();

    let e = aurum
        .estimate_purchase(purchase(GoldType::Jewelry, aurum::TROY_OUNCE_GRAMS))
        .await
        .unwrap();
    assert_eq!(e.unit, QuantityUnit::Grams);
    assert_eq!(e.estimated_cost, usd("2600.00"));
}

#[tokio::test]
async fn budget_is_compared_against_the_estimate() {
    let (p, _) = price_ok("p", 200_000).await;
    let aurum = Aurum::builder().with_connector(p).build().unwrap();

    let mut over = purchase(GoldType::Bar, usd("1"));
    over.budget = Some(usd("1000"));
    let e = aurum.estimate_purchase(over).await.unwrap();
    assert_eq!(e.estimated_cost, usd("2060.00"));
    assert_eq!(e.within_budget, Some(false));
    assert!(e.message.contains("exceeds your budget"), "{}", e.message);

    let mut under = purchase(GoldType::Bar, usd("1"));
    under.budget = Some(usd("5000"));
    let e = aurum.estimate_purchase(under).await.unwrap();
    assert_eq!(e.within_budget, Some(true));
}

#[tokio::test]
async fn estimate_without_providers_uses_synthetic_price() {
    let aurum = Aurum::builder().seed(11).build().unwrap();
    let e = aurum
        .estimate_purchase(purchase(GoldType::Digital, usd("0.5")))
        .await
        .unwrap();
    assert_eq!(e.price_source, PriceSource::Synthetic);
    assert!(e.estimated_cost > usd("0"));
    assert_eq!(
        e.estimated_cost,
        (usd("0.5") * e.unit_price * usd("1.025")).round_dp(2)
    );
}
