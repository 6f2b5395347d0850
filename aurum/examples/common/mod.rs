use std::sync::Arc;

use aurum::AurumConnector;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Connectors for the examples: the fixture mock in CI, HTTP connectors otherwise.
#[must_use]
pub fn get_connectors() -> Vec<Arc<dyn AurumConnector>> {
    if std::env::var("AURUM_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        vec![Arc::new(aurum_mock::MockConnector::new())]
    } else {
        vec![
            Arc::new(aurum_http::GoldApiConnector::from_env()),
            Arc::new(aurum_http::CoinGeckoConnector::from_env()),
            Arc::new(aurum_http::GeminiConnector::from_env()),
            Arc::new(aurum_http::NewsApiConnector::from_env()),
        ]
    }
}
