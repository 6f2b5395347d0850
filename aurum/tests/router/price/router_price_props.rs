use aurum::{Aurum, Capability, PriceSource};
use aurum_core::PricePayload;
use aurum_mock::{MockBehavior, fixtures};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::helpers::{price_ok, server_error, within_pct};

proptest! {
    #![proptest_config(ProptestConfig { cases: 24, .. ProptestConfig::default() })]
    #[test]
    fn every_quote_is_consistent_and_attributed(
        seed in any::<u64>(),
        spot_cents in 10_000i64..1_000_000,
        failing in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        tokio_test::block_on(async move {
            let (p, ctl) = price_ok("p", spot_cents).await;
            let aurum = Aurum::builder().with_connector(p).seed(seed).build().unwrap();
            let provider_spot = Decimal::new(spot_cents, 2);

            for (i, &fail) in failing.iter().enumerate() {
                let behavior = if fail {
                    MockBehavior::Fail(server_error("p"))
                } else {
                    MockBehavior::Return(PricePayload::Canonical(fixtures::quote(spot_cents)))
                };
                ctl.set_price_behavior(behavior).await;

                let q = aurum.price().await;
                assert!(q.is_consistent(), "call {i}: {q:?}");
                if fail {
                    assert_eq!(q.source, PriceSource::Synthetic);
                    // anchored at the provider price once one was seen, else the baseline
                    let center = if failing[..i].iter().any(|f| !f) {
                        provider_spot
                    } else {
                        Decimal::new(201_845, 2)
                    };
                    assert!(within_pct(&q, center, Decimal::new(15, 1)), "call {i}: {q:?}");
                } else {
                    assert_eq!(q.source, PriceSource::Provider("p".into()));
                    assert_eq!(q.spot_price_usd_per_oz, provider_spot);
                }
            }
            assert_eq!(ctl.calls(Capability::Price), failing.len() as u64);
        });
    }
}
