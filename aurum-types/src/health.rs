use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capability::Capability;

/// Outcome class of the most recent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Registered but not yet attempted.
    Idle,
    /// The provider answered successfully.
    Ok,
    /// The fallback generator produced the result.
    Fallback,
    /// The provider failed (timeout, remote error, malformed payload).
    Error,
}

/// Last-known state of one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderHealth {
    /// Connector name.
    pub provider_name: String,
    /// Capability this record tracks.
    pub capability: Capability,
    /// Status of the most recent attempt.
    pub last_status: HealthStatus,
    /// Error kind of the most recent attempt, when it failed.
    pub last_error: Option<String>,
    /// Latency of the most recent attempt.
    pub last_latency_ms: Option<u64>,
    /// When the most recent attempt finished.
    pub last_checked_at: Option<DateTime<Utc>>,
    /// Total recorded attempts.
    pub attempts: u64,
    /// Attempts that succeeded (or fallbacks that produced a result).
    pub successes: u64,
    /// Attempts that failed.
    pub failures: u64,
}

impl ProviderHealth {
    /// A fresh, never-attempted record.
    pub fn idle(provider_name: impl Into<String>, capability: Capability) -> Self {
        Self {
            provider_name: provider_name.into(),
            capability,
            last_status: HealthStatus::Idle,
            last_error: None,
            last_latency_ms: None,
            last_checked_at: None,
            attempts: 0,
            successes: 0,
            failures: 0,
        }
    }
}

/// Service-level health summary derived from the price path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// No price request has been served yet.
    Unknown,
    /// The most recent price came from a provider.
    Healthy,
    /// The most recent price came from the fallback.
    Degraded,
}

/// Health endpoint payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Summary status.
    pub status: OverallStatus,
    /// Per-provider records in registration order.
    pub providers: Vec<ProviderHealth>,
    /// Entries currently held by the reply cache.
    pub cache_size: u64,
    /// Crate version.
    pub version: String,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
}
