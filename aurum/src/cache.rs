use moka::future::Cache;

use aurum_core::{ChatQuery, ChatReply, ReplyCacheConfig};

/// Anonymous callers share one cache namespace.
const ANONYMOUS: &str = "anonymous";

/// Short-lived chat reply cache keyed by normalized message and caller.
///
/// Repeating a question within the TTL returns the earlier reply without
/// contacting any provider.
pub(crate) struct ReplyCache {
    inner: Cache<(String, String), ChatReply>,
}

impl ReplyCache {
    pub(crate) fn new(cfg: &ReplyCacheConfig) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(cfg.max_entries)
                .time_to_live(cfg.ttl)
                .build(),
        }
    }

    fn key(query: &ChatQuery) -> (String, String) {
        (
            query.message.trim().to_lowercase(),
            query
                .user_id
                .clone()
                .unwrap_or_else(|| ANONYMOUS.to_string()),
        )
    }

    pub(crate) async fn get(&self, query: &ChatQuery) -> Option<ChatReply> {
        self.inner.get(&Self::key(query)).await
    }

    pub(crate) async fn insert(&self, query: &ChatQuery, reply: ChatReply) {
        self.inner.insert(Self::key(query), reply).await;
    }

    /// Number of live entries after pending maintenance has run.
    pub(crate) async fn len(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}
