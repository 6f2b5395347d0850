mod common;

use aurum::{Aurum, Capability, GoldType, PurchaseRequest};
use common::{get_connectors, init_logging};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let connectors = get_connectors();
    let mut builder = Aurum::builder().prefer_names(Capability::Price, &["goldapi", "coingecko"]);
    for c in connectors {
        builder = builder.with_connector(c);
    }
    let aurum = builder.build()?;

    let req = PurchaseRequest {
        user_name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        phone: "+1 555 123 4567".into(),
        gold_type: GoldType::Coin,
        quantity: Decimal::new(25, 1),
        budget: Some(Decimal::from(5_000)),
        delivery_address: "1 Harbor Way, Arlington".into(),
    };

    let estimate = aurum.estimate_purchase(req).await?;
    println!("{estimate:#?}");
    Ok(())
}
