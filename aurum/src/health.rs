use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;

use aurum_core::{Capability, HealthStatus, ProviderError, ProviderHealth};

/// Result of one attempt as seen by the registry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Outcome<'a> {
    /// A provider answered.
    Success,
    /// A fallback generator answered.
    Fallback,
    /// The attempt failed.
    Failed(&'a ProviderError),
}

struct Entry {
    name: &'static str,
    capability: Capability,
    state: Mutex<ProviderHealth>,
}

/// Process-wide provider health, one record per (provider, capability).
///
/// Records are created up front and never removed. Each record has its own
/// lock so concurrent requests only contend on the provider they touch.
pub(crate) struct HealthRegistry {
    entries: Vec<Entry>,
}

impl HealthRegistry {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an idle record unless one already exists for the pair.
    pub(crate) fn register(&mut self, name: &'static str, capability: Capability) {
        if self.find(name, capability).is_none() {
            self.entries.push(Entry {
                name,
                capability,
                state: Mutex::new(ProviderHealth::idle(name, capability)),
            });
        }
    }

    fn find(&self, name: &str, capability: Capability) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.capability == capability)
    }

    /// Record one attempt. Unknown pairs are ignored.
    pub(crate) fn record(
        &self,
        name: &str,
        capability: Capability,
        outcome: Outcome<'_>,
        latency: Duration,
    ) {
        let Some(entry) = self.find(name, capability) else {
            return;
        };
        let mut h = entry.state.lock().unwrap_or_else(PoisonError::into_inner);
        h.attempts += 1;
        h.last_latency_ms = Some(u64::try_from(latency.as_millis()).unwrap_or(u64::MAX));
        h.last_checked_at = Some(Utc::now());
        match outcome {
            Outcome::Success | Outcome::Fallback => {
                h.successes += 1;
                h.last_error = None;
                h.last_status = if matches!(outcome, Outcome::Fallback) {
                    HealthStatus::Fallback
                } else {
                    HealthStatus::Ok
                };
            }
            Outcome::Failed(e) => {
                h.failures += 1;
                h.last_error = Some(e.kind().to_string());
                h.last_status = HealthStatus::Error;
            }
        }
    }

    /// Copy of every record in registration order.
    pub(crate) fn snapshot(&self) -> Vec<ProviderHealth> {
        self.entries
            .iter()
            .map(|e| e.state.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .collect()
    }
}
