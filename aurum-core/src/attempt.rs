use std::future::Future;
use std::time::Duration;

use aurum_types::ProviderError;

/// Run one provider future under a bounded wait.
///
/// On expiry the future is dropped (the in-flight call is abandoned) and the
/// outcome is `ProviderError::Timeout` for `provider`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "aurum_core::attempt",
        skip(fut),
        fields(
            provider = provider,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        ),
    )
)]
pub async fn attempt<T, Fut>(
    provider: &'static str,
    timeout: Duration,
    fut: Fut,
) -> Result<T, ProviderError>
where
    Fut: Future<Output = Result<T, ProviderError>>,
{
    (tokio::time::timeout(timeout, fut).await)
        .unwrap_or_else(|_| Err(ProviderError::timeout(provider, timeout)))
}
