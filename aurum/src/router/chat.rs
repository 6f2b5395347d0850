use chrono::Utc;

use aurum_core::{
    AurumError, Capability, ChatPrompt, ChatQuery, ChatReply, Headline, ProviderError,
    ReplySource, normalize, validate,
};

use crate::Aurum;

/// Words that make a message worth enriching with recent headlines.
const NEWS_TRIGGERS: [&str; 4] = ["news", "latest", "recent", "today"];

fn wants_news(message: &str) -> bool {
    let lower = message.to_lowercase();
    NEWS_TRIGGERS.iter().any(|w| lower.contains(w))
}

impl Aurum {
    /// Answer a chat question about gold.
    ///
    /// Behavior:
    /// - Rejects empty or over-long messages before contacting any provider.
    /// - With the reply cache enabled, a repeated question from the same caller
    ///   within the TTL returns the earlier reply.
    /// - Attaches the current price and, for news-flavored questions, recent headlines
    ///   to the prompt. A failed news lookup leaves the headlines empty.
    /// - Tries chat providers in priority order; the topic table answers when all fail.
    ///
    /// # Errors
    /// Returns `AurumError::Validation` for an invalid message only.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "aurum::router",
            skip(self, query),
            fields(user = query.user_id.as_deref().unwrap_or("anonymous")),
        )
    )]
    pub async fn chat(&self, query: ChatQuery) -> Result<ChatReply, AurumError> {
        let message = validate::chat_query(&query, self.cfg.max_message_chars)?;

        if let Some(cache) = &self.cache
            && let Some(hit) = cache.get(&query).await
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("serving cached reply");
            return Ok(hit);
        }

        let mut prompt = ChatPrompt::new(message);
        prompt.quote = Some(self.price().await);
        if wants_news(message) {
            prompt.headlines = self.headlines(message).await;
        }

        let reply = match self.chat_chain(&prompt).await {
            Some(reply) => reply,
            None => self.rule_based_reply(&prompt),
        };

        if let Some(cache) = &self.cache {
            cache.insert(&query, reply.clone()).await;
        }
        Ok(reply)
    }

    async fn chat_chain(&self, prompt: &ChatPrompt) -> Option<ChatReply> {
        self.first_success(Capability::Chat, |c| {
            c.as_chat_provider()?;
            let prompt = prompt.clone();
            Some(async move {
                let name = c.name();
                let p = c
                    .as_chat_provider()
                    .ok_or_else(|| ProviderError::malformed(name, "missing chat capability"))?;
                let payload = p.reply(&prompt).await?;
                payload.validate(name, &prompt.message)?;
                normalize::chat(payload, name, &prompt, Utc::now())
            })
        })
        .await
        .map(|(_, reply)| reply)
    }

    fn rule_based_reply(&self, prompt: &ChatPrompt) -> ChatReply {
        let m = self.rule_based.answer(prompt);
        ChatReply {
            text: m.text,
            source: ReplySource::RuleBased,
            matched_topic: m.topic,
            provider: None,
            quote: prompt.quote.clone(),
            headlines: prompt.headlines.clone(),
            replied_at: Utc::now(),
        }
    }

    /// Fetch recent gold headlines related to `query`.
    ///
    /// Tries news providers in priority order. Returns an empty list when none
    /// is configured or all fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "aurum::router", skip(self))
    )]
    pub async fn headlines(&self, query: &str) -> Vec<Headline> {
        self.first_success(Capability::News, |c| {
            c.as_news_provider()?;
            let query = query.to_string();
            Some(async move {
                let name = c.name();
                let p = c
                    .as_news_provider()
                    .ok_or_else(|| ProviderError::malformed(name, "missing news capability"))?;
                Ok::<_, ProviderError>(normalize::news(p.headlines(&query).await?))
            })
        })
        .await
        .map(|(_, h)| h)
        .unwrap_or_default()
    }
}
