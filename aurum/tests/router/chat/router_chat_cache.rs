use std::time::Duration;

use aurum::{Aurum, Capability, ChatQuery, ReplyCacheConfig};
use aurum_mock::fixtures::REPLY;

use crate::helpers::{chat_ok, price_ok};

fn cache() -> ReplyCacheConfig {
    ReplyCacheConfig {
        ttl: Duration::from_secs(60),
        max_entries: 64,
    }
}

#[tokio::test]
async fn repeated_question_is_served_from_cache() {
    let (p, p_ctl) = price_ok("p", 203_450).await;
    let (m, m_ctl) = chat_ok("m", REPLY).await;
    let aurum = Aurum::builder()
        .with_connector(p)
        .with_connector(m)
        .reply_cache(cache())
        .build()
        .unwrap();

    let first = aurum
        .chat(ChatQuery::new("Is gold a safe haven?").with_user("u1"))
        .await
        .unwrap();
    // normalized: case and surrounding whitespace are ignored
    let second = aurum
        .chat(ChatQuery::new("  is gold a SAFE haven?").with_user("u1"))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(m_ctl.calls(Capability::Chat), 1);
    assert_eq!(p_ctl.calls(Capability::Price), 1);
    assert_eq!(aurum.health_report().await.cache_size, 1);
}

#[tokio::test]
async fn cache_is_scoped_per_user() {
    let (m, m_ctl) = chat_ok("m", REPLY).await;
    let aurum = Aurum::builder()
        .with_connector(m)
        .reply_cache(cache())
        .build()
        .unwrap();

    aurum
        .chat(ChatQuery::new("Is gold a safe haven?").with_user("u1"))
        .await
        .unwrap();
    aurum
        .chat(ChatQuery::new("Is gold a safe haven?").with_user("u2"))
        .await
        .unwrap();
    aurum
        .chat(ChatQuery::new("Is gold a safe haven?"))
        .await
        .unwrap();

    assert_eq!(m_ctl.calls(Capability::Chat), 3);
    assert_eq!(aurum.health_report().await.cache_size, 3);
}

#[tokio::test]
async fn without_cache_every_question_reaches_the_provider() {
    let (m, m_ctl) = chat_ok("m", REPLY).await;
    let aurum = Aurum::builder().with_connector(m).build().unwrap();

    for _ in 0..3 {
        aurum.chat(ChatQuery::new("Is gold a safe haven?")).await.unwrap();
    }
    assert_eq!(m_ctl.calls(Capability::Chat), 3);
    assert_eq!(aurum.health_report().await.cache_size, 0);
}
