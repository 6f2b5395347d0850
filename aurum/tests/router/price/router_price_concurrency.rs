use std::sync::Arc;

use aurum::{Aurum, Capability, PriceSource};
use futures::future::join_all;

use crate::helpers::{price_ok, record, usd};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_are_each_recorded() {
    let (a, a_ctl) = price_ok("a", 203_450).await;
    let aurum = Arc::new(Aurum::builder().with_connector(a).build().unwrap());

    let handles = (0..16).map(|_| {
        let aurum = Arc::clone(&aurum);
        tokio::spawn(async move { aurum.price().await })
    });
    let quotes = join_all(handles).await;

    for q in quotes {
        let q = q.unwrap();
        assert_eq!(q.spot_price_usd_per_oz, usd("2034.50"));
        assert_eq!(q.source, PriceSource::Provider("a".into()));
    }
    assert_eq!(a_ctl.calls(Capability::Price), 16);
    let h = aurum.health();
    let a_h = record(&h, "a", Capability::Price);
    assert_eq!((a_h.attempts, a_h.successes), (16, 16));
}

#[tokio::test]
async fn concurrent_fallbacks_stay_in_bounds() {
    let aurum = Aurum::builder().build().unwrap();
    let quotes = join_all((0..32).map(|_| aurum.price())).await;
    for q in &quotes {
        assert_eq!(q.source, PriceSource::Synthetic);
        assert!(q.is_consistent());
    }
    let h = aurum.health();
    assert_eq!(record(&h, "synthetic", Capability::Price).attempts, 32);
}
