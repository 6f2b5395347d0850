use aurum::{Aurum, Capability, HealthStatus, OverallStatus, ProviderHealth};
use aurum_mock::MockConnector;
use std::sync::Arc;

use crate::helpers::{chat_ok, news_ok, price_ok};

fn names(h: &[ProviderHealth]) -> Vec<(String, Capability)> {
    h.iter()
        .map(|r| (r.provider_name.clone(), r.capability))
        .collect()
}

#[tokio::test]
async fn fresh_instance_reports_idle_records_and_unknown_status() {
    let (n, _) = news_ok("n").await;
    let (m, _) = chat_ok("m", aurum_mock::fixtures::REPLY).await;
    let (p, _) = price_ok("p", 203_450).await;
    let aurum = Aurum::builder()
        .with_connector(n)
        .with_connector(m)
        .with_connector(p)
        .build()
        .unwrap();

    let report = aurum.health_report().await;
    assert_eq!(report.status, OverallStatus::Unknown);
    assert_eq!(report.cache_size, 0);
    assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(
        names(&report.providers),
        vec![
            ("p".to_string(), Capability::Price),
            ("m".to_string(), Capability::Chat),
            ("n".to_string(), Capability::News),
            ("synthetic".to_string(), Capability::Price),
            ("rule-based".to_string(), Capability::Chat),
        ]
    );
    assert!(
        report
            .providers
            .iter()
            .all(|h| h.last_status == HealthStatus::Idle && h.last_checked_at.is_none())
    );
}

#[tokio::test]
async fn multi_capability_connector_gets_one_record_per_capability() {
    let mock = Arc::new(MockConnector::new());
    let aurum = Aurum::builder().with_connector(mock).build().unwrap();

    let h = aurum.health();
    let mine: Vec<_> = h
        .iter()
        .filter(|r| r.provider_name == "aurum-mock")
        .map(|r| r.capability)
        .collect();
    assert_eq!(mine, vec![Capability::Price, Capability::Chat, Capability::News]);
}

#[tokio::test]
async fn status_tracks_the_most_recent_price_source() {
    let (p, p_ctl) = price_ok("p", 203_450).await;
    let aurum = Aurum::builder().with_connector(p).build().unwrap();

    aurum.price().await;
    assert_eq!(aurum.health_report().await.status, OverallStatus::Healthy);

    p_ctl.set_configured(false);
    aurum.price().await;
    assert_eq!(aurum.health_report().await.status, OverallStatus::Degraded);

    p_ctl.set_configured(true);
    aurum.price().await;
    assert_eq!(aurum.health_report().await.status, OverallStatus::Healthy);
}

#[tokio::test]
async fn report_serializes_for_status_endpoints() {
    let aurum = Aurum::builder().build().unwrap();
    aurum.price().await;
    let report = aurum.health_report().await;
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["providers"][0]["provider_name"], "synthetic");
    assert_eq!(json["providers"][0]["last_status"], "fallback");
}
