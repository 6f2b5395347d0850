use std::time::Duration;

use aurum::{Aurum, AurumConfig, AurumError, Capability, FallbackConfig};
use aurum_mock::MockConnector;
use std::sync::Arc;

#[test]
fn zero_timeout_is_rejected() {
    let err = Aurum::builder()
        .provider_timeout(Duration::ZERO)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, AurumError::InvalidArg(_)));
}

#[test]
fn zero_message_limit_is_rejected() {
    let err = Aurum::builder().max_message_chars(0).build().err().unwrap();
    assert!(matches!(err, AurumError::InvalidArg(_)));
}

#[test]
fn non_positive_baseline_is_rejected() {
    let err = Aurum::builder()
        .fallback(FallbackConfig {
            baseline_price: rust_decimal::Decimal::ZERO,
            ..FallbackConfig::default()
        })
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, AurumError::InvalidArg(_)));
}

#[tokio::test]
async fn sub_cent_baseline_is_rejected_at_build() {
    let err = Aurum::builder()
        .fallback(FallbackConfig {
            baseline_price: rust_decimal::Decimal::new(4, 3),
            ..FallbackConfig::default()
        })
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, AurumError::InvalidArg(_)));

    let aurum = Aurum::builder()
        .fallback(FallbackConfig {
            baseline_price: rust_decimal::Decimal::new(1, 2),
            ..FallbackConfig::default()
        })
        .build()
        .unwrap();
    assert!(aurum.price().await.spot_price_usd_per_oz > rust_decimal::Decimal::ZERO);
}

#[test]
fn config_replaces_defaults_but_keeps_connectors() {
    let cfg = AurumConfig {
        provider_timeout: Duration::from_millis(750),
        chat_priority: vec!["aurum-mock".into(), "missing".into()],
        ..AurumConfig::default()
    };
    let aurum = Aurum::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .config(cfg)
        .build()
        .unwrap();
    assert_eq!(aurum.config().provider_timeout, Duration::from_millis(750));
    assert_eq!(aurum.config().chat_priority, vec!["aurum-mock".to_string()]);
    assert_eq!(
        aurum
            .health()
            .iter()
            .filter(|h| h.capability == Capability::Chat)
            .count(),
        2
    );
}
