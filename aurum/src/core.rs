use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use aurum_core::{
    AurumConfig, AurumConnector, AurumError, Capability, FallbackConfig, PriceSource,
    ProviderError, ReplyCacheConfig, RuleBasedChat, SyntheticPrice, TopicTable, attempt,
};

use crate::cache::ReplyCache;
use crate::health::{HealthRegistry, Outcome};

/// Orchestrator that routes requests across registered providers and falls
/// back to local generators when none succeeds.
pub struct Aurum {
    pub(crate) connectors: Vec<Arc<dyn AurumConnector>>,
    pub(crate) cfg: AurumConfig,
    pub(crate) synthetic: Arc<SyntheticPrice>,
    pub(crate) rule_based: Arc<RuleBasedChat>,
    pub(crate) health: HealthRegistry,
    pub(crate) cache: Option<ReplyCache>,
    pub(crate) last_price_source: Mutex<Option<PriceSource>>,
}

/// Builder for constructing an `Aurum` orchestrator with custom configuration.
pub struct AurumBuilder {
    connectors: Vec<Arc<dyn AurumConnector>>,
    cfg: AurumConfig,
}

impl Default for AurumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn priority_mut(cfg: &mut AurumConfig, capability: Capability) -> &mut Vec<String> {
    match capability {
        Capability::Price => &mut cfg.price_priority,
        Capability::Chat => &mut cfg.chat_priority,
        Capability::News => &mut cfg.news_priority,
    }
}

pub(crate) fn supports(c: &dyn AurumConnector, capability: Capability) -> bool {
    match capability {
        Capability::Price => c.as_price_provider().is_some(),
        Capability::Chat => c.as_chat_provider().is_some(),
        Capability::News => c.as_news_provider().is_some(),
    }
}

impl AurumBuilder {
    /// Create a new builder with default configuration.
    ///
    /// - Starts with no connectors. With none registered every price comes from
    ///   the synthetic walk and every chat reply from the topic table.
    /// - 5s provider timeout, 1000-character message limit, reply cache off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: AurumConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order breaks ties among connectors not named in a
    /// priority list. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn AurumConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration. Connectors are kept.
    #[must_use]
    pub fn config(mut self, cfg: AurumConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set preferred providers for a capability using connector instances.
    ///
    /// Connectors not listed still take part, after the listed ones.
    #[must_use]
    pub fn prefer_for(
        mut self,
        capability: Capability,
        connectors_desc: &[Arc<dyn AurumConnector>],
    ) -> Self {
        *priority_mut(&mut self.cfg, capability) = connectors_desc
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        self
    }

    /// Set preferred providers for a capability by connector name.
    #[must_use]
    pub fn prefer_names(mut self, capability: Capability, names: &[&str]) -> Self {
        *priority_mut(&mut self.cfg, capability) =
            names.iter().map(|n| (*n).to_string()).collect();
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Tune the synthetic price walk.
    #[must_use]
    pub fn fallback(mut self, cfg: FallbackConfig) -> Self {
        self.cfg.fallback = cfg;
        self
    }

    /// Seed the synthetic price walk for reproducible sequences.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.cfg.fallback.seed = Some(seed);
        self
    }

    /// Replace the rule-based topic table.
    #[must_use]
    pub fn topics(mut self, topics: TopicTable) -> Self {
        self.cfg.topics = topics;
        self
    }

    /// Maximum accepted chat message length in characters.
    #[must_use]
    pub const fn max_message_chars(mut self, n: usize) -> Self {
        self.cfg.max_message_chars = n;
        self
    }

    /// Enable the chat reply cache.
    #[must_use]
    pub const fn reply_cache(mut self, cfg: ReplyCacheConfig) -> Self {
        self.cfg.reply_cache = Some(cfg);
        self
    }

    /// Build the `Aurum` orchestrator.
    ///
    /// Priority lists are filtered to registered connector names and deduplicated.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero provider timeout, a zero message limit,
    /// or an out-of-range fallback configuration.
    pub fn build(mut self) -> Result<Aurum, AurumError> {
        if self.cfg.provider_timeout.is_zero() {
            return Err(AurumError::InvalidArg(
                "provider_timeout must be greater than zero".to_string(),
            ));
        }
        if self.cfg.max_message_chars == 0 {
            return Err(AurumError::InvalidArg(
                "max_message_chars must be greater than zero".to_string(),
            ));
        }

        let known: HashSet<&'static str> = self.connectors.iter().map(|c| c.name()).collect();
        for cap in [Capability::Price, Capability::Chat, Capability::News] {
            let v = priority_mut(&mut self.cfg, cap);
            let mut seen: HashSet<String> = HashSet::new();
            v.retain(|n| known.contains(n.as_str()) && seen.insert(n.clone()));
        }

        let synthetic = Arc::new(SyntheticPrice::from_config(&self.cfg.fallback)?);
        let rule_based = Arc::new(RuleBasedChat::new(self.cfg.topics.clone()));
        let cache = self.cfg.reply_cache.as_ref().map(ReplyCache::new);

        let mut me = Aurum {
            connectors: self.connectors,
            cfg: self.cfg,
            synthetic,
            rule_based,
            health: HealthRegistry::new(),
            cache,
            last_price_source: Mutex::new(None),
        };

        let mut health = HealthRegistry::new();
        for cap in [Capability::Price, Capability::Chat, Capability::News] {
            for c in me.ordered(cap) {
                health.register(c.name(), cap);
            }
        }
        health.register(me.synthetic.name(), Capability::Price);
        health.register(me.rule_based.name(), Capability::Chat);
        me.health = health;

        Ok(me)
    }
}

impl Aurum {
    /// Start building a new `Aurum` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use aurum::{Aurum, Capability};
    /// use aurum_http::{CoinGeckoConnector, GoldApiConnector};
    ///
    /// let goldapi = Arc::new(GoldApiConnector::from_env());
    /// let coingecko = Arc::new(CoinGeckoConnector::from_env());
    ///
    /// let aurum = Aurum::builder()
    ///     .with_connector(coingecko.clone())
    ///     .with_connector(goldapi.clone())
    ///     .prefer_for(Capability::Price, &[goldapi, coingecko])
    ///     .build()?;
    /// let quote = aurum.price().await;
    /// ```
    #[must_use]
    pub fn builder() -> AurumBuilder {
        AurumBuilder::new()
    }

    /// Effective configuration after build-time filtering.
    #[must_use]
    pub const fn config(&self) -> &AurumConfig {
        &self.cfg
    }

    fn priority(&self, capability: Capability) -> &[String] {
        match capability {
            Capability::Price => &self.cfg.price_priority,
            Capability::Chat => &self.cfg.chat_priority,
            Capability::News => &self.cfg.news_priority,
        }
    }

    /// Registered connectors supporting `capability`, listed ones first in
    /// list order, the rest in registration order.
    pub(crate) fn ordered(&self, capability: Capability) -> Vec<Arc<dyn AurumConnector>> {
        let pos: HashMap<&str, usize> = self
            .priority(capability)
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let mut out: Vec<(usize, Arc<dyn AurumConnector>)> = self
            .connectors
            .iter()
            .filter(|&c| supports(&**c, capability))
            .cloned()
            .enumerate()
            .collect();
        out.sort_by_key(|(orig_i, c)| (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i));
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// The ordered chain for `capability` terminated by its fallback generator.
    pub(crate) fn chain(&self, capability: Capability) -> Vec<Arc<dyn AurumConnector>> {
        let mut out = self.ordered(capability);
        match capability {
            Capability::Price => out.push(Arc::clone(&self.synthetic) as Arc<dyn AurumConnector>),
            Capability::Chat => out.push(Arc::clone(&self.rule_based) as Arc<dyn AurumConnector>),
            Capability::News => {}
        }
        out
    }

    /// Try each connector of the chain in order under the provider timeout.
    ///
    /// - Unconfigured connectors are skipped without an attempt or a health record.
    /// - Every attempt is recorded exactly once.
    /// - Returns the first success with the name of the connector that produced it,
    ///   or `None` when the chain is exhausted.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "aurum::core::first_success",
            skip(self, call),
            fields(capability = %capability),
        )
    )]
    pub(crate) async fn first_success<T, F, Fut>(
        &self,
        capability: Capability,
        call: F,
    ) -> Option<(Arc<dyn AurumConnector>, T)>
    where
        F: Fn(Arc<dyn AurumConnector>) -> Option<Fut>,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        for c in self.chain(capability) {
            if !c.is_configured() {
                #[cfg(feature = "tracing")]
                tracing::debug!(provider = c.name(), "skipping unconfigured provider");
                continue;
            }
            let Some(fut) = call(c.clone()) else {
                continue;
            };

            let started = Instant::now();
            let res = attempt(c.name(), self.cfg.provider_timeout, fut).await;
            let latency = started.elapsed();

            match res {
                Ok(v) => {
                    let outcome = if c.is_fallback() {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(provider = c.name(), "all providers failed; using fallback");
                        Outcome::Fallback
                    } else {
                        Outcome::Success
                    };
                    self.health.record(c.name(), capability, outcome, latency);
                    return Some((c, v));
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        provider = c.name(),
                        kind = e.kind(),
                        error = %e,
                        latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        "provider attempt failed"
                    );
                    if e.counts_as_failure() {
                        self.health
                            .record(c.name(), capability, Outcome::Failed(&e), latency);
                    }
                }
            }
        }
        None
    }
}
