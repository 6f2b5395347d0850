use std::sync::PoisonError;

use chrono::Utc;

use aurum_core::{HealthReport, OverallStatus, ProviderHealth};

use crate::Aurum;

impl Aurum {
    /// Snapshot of every provider record in registration order: price chain,
    /// chat chain, news chain, then the fallback generators.
    #[must_use]
    pub fn health(&self) -> Vec<ProviderHealth> {
        self.health.snapshot()
    }

    /// Aggregate health view.
    ///
    /// `Healthy` when the most recent price came from a provider, `Degraded`
    /// when it came from the synthetic walk, `Unknown` before any price request.
    pub async fn health_report(&self) -> HealthReport {
        let status = match &*self
            .last_price_source
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
        {
            None => OverallStatus::Unknown,
            Some(s) if s.is_synthetic() => OverallStatus::Degraded,
            Some(_) => OverallStatus::Healthy,
        };
        let cache_size = match &self.cache {
            Some(c) => c.len().await,
            None => 0,
        };
        HealthReport {
            status,
            providers: self.health(),
            cache_size,
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
        }
    }
}
