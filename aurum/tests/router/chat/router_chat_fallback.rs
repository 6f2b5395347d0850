use std::time::Duration;

use aurum::{Aurum, Capability, ChatQuery, HealthStatus, ReplySource};
use aurum_core::ChatPayload;
use aurum_core::payload::GeminiResponse;
use aurum_mock::MockBehavior;
use aurum_mock::fixtures::REPLY;

use crate::helpers::{chat_ok, record, server_error};

#[tokio::test]
async fn price_question_without_providers_uses_topic_table() {
    let aurum = Aurum::builder().build().unwrap();

    let r = aurum
        .chat(ChatQuery::new("what is the current price of gold"))
        .await
        .unwrap();
    assert_eq!(r.source, ReplySource::RuleBased);
    assert_eq!(r.matched_topic.as_deref(), Some("price"));
    assert_eq!(r.provider, None);
    // live figure from the synthetic quote
    assert!(r.text.contains("per oz"), "{}", r.text);
    assert!(r.quote.is_some());

    let h = aurum.health();
    assert_eq!(
        record(&h, "rule-based", Capability::Chat).last_status,
        HealthStatus::Fallback
    );
}

#[tokio::test]
async fn unmatched_question_still_gets_a_reply() {
    let aurum = Aurum::builder().build().unwrap();
    let r = aurum
        .chat(ChatQuery::new("tell me something about bullion dealers"))
        .await
        .unwrap();
    assert_eq!(r.source, ReplySource::RuleBased);
    assert_eq!(r.matched_topic, None);
    assert!(!r.text.trim().is_empty());
}

#[tokio::test]
async fn first_matching_topic_wins() {
    let aurum = Aurum::builder().build().unwrap();
    // "price" and "invest" both match; the price topic comes first
    let r = aurum
        .chat(ChatQuery::new("should i invest at this price?"))
        .await
        .unwrap();
    assert_eq!(r.matched_topic.as_deref(), Some("price"));
}

#[tokio::test]
async fn short_generated_reply_falls_back_to_rules() {
    let (m, m_ctl) = chat_ok("m", "Yes, buy.").await;
    let aurum = Aurum::builder().with_connector(m).build().unwrap();

    let r = aurum
        .chat(ChatQuery::new("Is now a good time to buy gold?"))
        .await
        .unwrap();
    assert_eq!(r.source, ReplySource::RuleBased);
    assert_eq!(r.matched_topic.as_deref(), Some("investment"));
    assert_eq!(m_ctl.calls(Capability::Chat), 1);

    let h = aurum.health();
    let m_h = record(&h, "m", Capability::Chat);
    assert_eq!(m_h.last_status, HealthStatus::Error);
    assert_eq!(m_h.last_error.as_deref(), Some("malformed"));
}

#[tokio::test]
async fn reply_echoing_the_question_is_rejected() {
    let question = "Explain how gold purity is measured in karats";
    let echo = format!("{question}? Sure. Purity is measured in karats, where 24k is pure gold.");
    let (m, _) = chat_ok("m", &echo).await;
    let aurum = Aurum::builder().with_connector(m).build().unwrap();

    let r = aurum.chat(ChatQuery::new(question)).await.unwrap();
    assert_eq!(r.source, ReplySource::RuleBased);
    assert_eq!(r.matched_topic.as_deref(), Some("purity"));
}

#[tokio::test]
async fn gemini_response_without_candidates_falls_back() {
    let (m, m_ctl) = chat_ok("m", REPLY).await;
    m_ctl
        .set_chat_behavior(MockBehavior::Return(ChatPayload::Gemini(GeminiResponse {
            candidates: vec![],
        })))
        .await;
    let aurum = Aurum::builder().with_connector(m).build().unwrap();

    let r = aurum.chat(ChatQuery::new("hello")).await.unwrap();
    assert_eq!(r.source, ReplySource::RuleBased);
    assert_eq!(r.matched_topic.as_deref(), Some("greeting"));
}

#[tokio::test]
async fn failing_provider_moves_on_to_the_next() {
    let (a, a_ctl) = chat_ok("a", REPLY).await;
    a_ctl
        .set_chat_behavior(MockBehavior::Fail(server_error("a")))
        .await;
    let (b, _) = chat_ok("b", REPLY).await;

    let aurum = Aurum::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let r = aurum
        .chat(ChatQuery::new("Why do central banks buy gold?"))
        .await
        .unwrap();
    assert_eq!(r.provider.as_deref(), Some("b"));
}

#[tokio::test(start_paused = true)]
async fn hanging_chat_provider_times_out_to_rules() {
    let (m, m_ctl) = chat_ok("m", REPLY).await;
    m_ctl.set_chat_behavior(MockBehavior::Hang).await;
    let aurum = Aurum::builder()
        .with_connector(m)
        .provider_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let r = aurum.chat(ChatQuery::new("help")).await.unwrap();
    assert_eq!(r.source, ReplySource::RuleBased);
    assert_eq!(r.matched_topic.as_deref(), Some("help"));

    let h = aurum.health();
    let m_h = record(&h, "m", Capability::Chat);
    assert_eq!(m_h.last_error.as_deref(), Some("timeout"));
    assert_eq!(m_h.last_latency_ms.map(|l| l >= 2_000), Some(true));
}
