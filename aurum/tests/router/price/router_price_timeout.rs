use std::time::Duration;

use aurum::{Aurum, Capability, HealthStatus, PriceSource};
use tokio::time::Instant;

use crate::helpers::{price_hang, price_ok, record};

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out_and_next_one_answers() {
    let (a, a_ctl) = price_hang("a").await;
    let (b, b_ctl) = price_ok("b", 203_450).await;

    let aurum = Aurum::builder()
        .with_connector(a.clone())
        .with_connector(b.clone())
        .prefer_for(Capability::Price, &[a, b])
        .build()
        .unwrap();

    let started = Instant::now();
    let q = aurum.price().await;
    assert!(started.elapsed() >= Duration::from_secs(5));
    assert_eq!(q.source, PriceSource::Provider("b".into()));
    assert_eq!(a_ctl.calls(Capability::Price), 1);
    assert_eq!(b_ctl.calls(Capability::Price), 1);

    let health = aurum.health();
    let a_h = record(&health, "a", Capability::Price);
    assert_eq!(a_h.last_status, HealthStatus::Error);
    assert_eq!(a_h.last_error.as_deref(), Some("timeout"));
    let latency = a_h.last_latency_ms.unwrap();
    assert!((5_000..=5_001).contains(&latency), "latency {latency}");
    assert_eq!(a_h.failures, 1);

    let b_h = record(&health, "b", Capability::Price);
    assert_eq!(b_h.last_status, HealthStatus::Ok);
    assert_eq!(b_h.successes, 1);
}

#[tokio::test(start_paused = true)]
async fn custom_timeout_bounds_each_attempt() {
    let (a, _) = price_hang("a").await;
    let (b, _) = price_hang("b").await;

    let aurum = Aurum::builder()
        .with_connector(a)
        .with_connector(b)
        .provider_timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    let started = Instant::now();
    let q = aurum.price().await;
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_secs(1));
    assert_eq!(q.source, PriceSource::Synthetic);

    let health = aurum.health();
    for name in ["a", "b"] {
        assert_eq!(
            record(&health, name, Capability::Price).last_error.as_deref(),
            Some("timeout")
        );
    }
    assert_eq!(
        record(&health, "synthetic", Capability::Price).last_status,
        HealthStatus::Fallback
    );
}
