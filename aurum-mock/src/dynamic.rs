use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use aurum_core::connector::{AurumConnector, ChatPrompt, ChatProvider, NewsProvider, PriceProvider};
use aurum_core::{Capability, ChatPayload, NewsPayload, PricePayload, ProviderError};

/// Instruction for how a method should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(ProviderError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct Behaviors {
    price: Option<MockBehavior<PricePayload>>,
    chat: Option<MockBehavior<ChatPayload>>,
    news: Option<MockBehavior<NewsPayload>>,
    prompts: Vec<ChatPrompt>,
}

struct InternalState {
    behaviors: Mutex<Behaviors>,
    configured: AtomicBool,
    price_calls: AtomicU64,
    chat_calls: AtomicU64,
    news_calls: AtomicU64,
}

impl InternalState {
    fn counter(&self, cap: Capability) -> &AtomicU64 {
        match cap {
            Capability::Price => &self.price_calls,
            Capability::Chat => &self.chat_calls,
            Capability::News => &self.news_calls,
        }
    }
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<InternalState>,
}

impl DynamicMockController {
    /// Set the behavior for `spot_price` calls.
    pub async fn set_price_behavior(&self, behavior: MockBehavior<PricePayload>) {
        self.state.behaviors.lock().await.price = Some(behavior);
    }

    /// Set the behavior for `reply` calls.
    pub async fn set_chat_behavior(&self, behavior: MockBehavior<ChatPayload>) {
        self.state.behaviors.lock().await.chat = Some(behavior);
    }

    /// Set the behavior for `headlines` calls.
    pub async fn set_news_behavior(&self, behavior: MockBehavior<NewsPayload>) {
        self.state.behaviors.lock().await.news = Some(behavior);
    }

    /// Toggle whether the connector reports a credential.
    pub fn set_configured(&self, configured: bool) {
        self.state.configured.store(configured, Ordering::SeqCst);
    }

    /// Number of calls received for `capability`.
    #[must_use]
    pub fn calls(&self, capability: Capability) -> u64 {
        self.state.counter(capability).load(Ordering::SeqCst)
    }

    /// Number of calls received across all capabilities.
    #[must_use]
    pub fn total_calls(&self) -> u64 {
        [Capability::Price, Capability::Chat, Capability::News]
            .into_iter()
            .map(|c| self.calls(c))
            .sum()
    }

    /// Prompts received by `reply`, in call order.
    pub async fn prompts(&self) -> Vec<ChatPrompt> {
        self.state.behaviors.lock().await.prompts.clone()
    }

    /// Clear all configured behaviors, counters and logs.
    pub async fn clear_all_behaviors(&self) {
        *self.state.behaviors.lock().await = Behaviors::default();
        for c in [Capability::Price, Capability::Chat, Capability::News] {
            self.state.counter(c).store(0, Ordering::SeqCst);
        }
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Only the capabilities passed at construction are advertised. A call to an
/// advertised capability with no scripted behavior fails with a remote error.
pub struct DynamicMockConnector {
    name: &'static str,
    capabilities: Vec<Capability>,
    state: Arc<InternalState>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
        capabilities: &[Capability],
    ) -> (Arc<dyn AurumConnector>, DynamicMockController) {
        let state = Arc::new(InternalState {
            behaviors: Mutex::new(Behaviors::default()),
            configured: AtomicBool::new(true),
            price_calls: AtomicU64::new(0),
            chat_calls: AtomicU64::new(0),
            news_calls: AtomicU64::new(0),
        });
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name,
            capabilities: capabilities.to_vec(),
            state,
        });
        (me as Arc<dyn AurumConnector>, controller)
    }

    fn advertises(&self, cap: Capability) -> bool {
        self.capabilities.contains(&cap)
    }

    fn unscripted(&self, cap: Capability) -> ProviderError {
        ProviderError::remote(self.name, None, format!("no {cap} behavior scripted"))
    }
}

async fn run<T>(
    behavior: Option<MockBehavior<T>>,
    missing: ProviderError,
) -> Result<T, ProviderError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(missing),
    }
}

impl AurumConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn is_configured(&self) -> bool {
        self.state.configured.load(Ordering::SeqCst)
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        self.advertises(Capability::Price)
            .then_some(self as &dyn PriceProvider)
    }

    fn as_chat_provider(&self) -> Option<&dyn ChatProvider> {
        self.advertises(Capability::Chat)
            .then_some(self as &dyn ChatProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.advertises(Capability::News)
            .then_some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl PriceProvider for DynamicMockConnector {
    async fn spot_price(&self) -> Result<PricePayload, ProviderError> {
        self.state.price_calls.fetch_add(1, Ordering::SeqCst);
        // Snapshot the behavior without holding the lock across the call
        let behavior = self.state.behaviors.lock().await.price.clone();
        run(behavior, self.unscripted(Capability::Price)).await
    }
}

#[async_trait]
impl ChatProvider for DynamicMockConnector {
    async fn reply(&self, prompt: &ChatPrompt) -> Result<ChatPayload, ProviderError> {
        self.state.chat_calls.fetch_add(1, Ordering::SeqCst);
        let behavior = {
            let mut guard = self.state.behaviors.lock().await;
            guard.prompts.push(prompt.clone());
            guard.chat.clone()
        };
        run(behavior, self.unscripted(Capability::Chat)).await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn headlines(&self, _query: &str) -> Result<NewsPayload, ProviderError> {
        self.state.news_calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self.state.behaviors.lock().await.news.clone();
        run(behavior, self.unscripted(Capability::News)).await
    }
}
