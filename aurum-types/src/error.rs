use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single provider attempt.
///
/// These never reach callers of the orchestrator: they steer adapter selection
/// and feed the health registry only.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProviderError {
    /// No credential is present for this provider; the attempt was not made.
    #[error("{provider} is not configured")]
    Unconfigured {
        /// Connector name lacking a credential.
        provider: String,
    },

    /// The attempt exceeded its bounded wait and was abandoned.
    #[error("{provider} timed out after {timeout_ms}ms")]
    Timeout {
        /// Connector name that timed out.
        provider: String,
        /// The bound that was exceeded.
        timeout_ms: u64,
    },

    /// The provider answered with a non-success status or the transport failed.
    #[error("{provider} remote error (status {status:?}): {body}")]
    RemoteError {
        /// Connector name that failed.
        provider: String,
        /// HTTP status when one was received; `None` for transport failures.
        status: Option<u16>,
        /// Response body or transport error message.
        body: String,
    },

    /// The provider answered but the payload violates its documented shape.
    #[error("{provider} returned a malformed response: {detail}")]
    MalformedResponse {
        /// Connector name that returned the payload.
        provider: String,
        /// What was wrong with the payload.
        detail: String,
    },
}

impl ProviderError {
    /// Helper: build an `Unconfigured` error.
    pub fn unconfigured(provider: impl Into<String>) -> Self {
        Self::Unconfigured {
            provider: provider.into(),
        }
    }

    /// Helper: build a `Timeout` error from the exceeded bound.
    pub fn timeout(provider: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            provider: provider.into(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Helper: build a `RemoteError`.
    pub fn remote(
        provider: impl Into<String>,
        status: Option<u16>,
        body: impl Into<String>,
    ) -> Self {
        Self::RemoteError {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    /// Helper: build a `MalformedResponse` error.
    pub fn malformed(provider: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.into(),
            detail: detail.into(),
        }
    }

    /// Connector name carried by every variant.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::Unconfigured { provider }
            | Self::Timeout { provider, .. }
            | Self::RemoteError { provider, .. }
            | Self::MalformedResponse { provider, .. } => provider,
        }
    }

    /// Short, stable label used in health records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unconfigured { .. } => "unconfigured",
            Self::Timeout { .. } => "timeout",
            Self::RemoteError { .. } => "remote",
            Self::MalformedResponse { .. } => "malformed",
        }
    }

    /// Returns true if this outcome should count against provider health.
    ///
    /// A missing credential is expected configuration, not a runtime failure.
    #[must_use]
    pub const fn counts_as_failure(&self) -> bool {
        !matches!(self, Self::Unconfigured { .. })
    }
}

/// Unified error type surfaced to callers of the aurum orchestrator.
///
/// Price and chat requests never fail because of providers; the only
/// user-visible failures are input validation and builder misuse.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AurumError {
    /// A request field failed validation before any provider was contacted.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Offending field name, e.g. "quantity".
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// Invalid builder or configuration argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl AurumError {
    /// Helper: build a field-level `Validation` error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Field name for validation failures.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::InvalidArg(_) => None,
        }
    }
}
