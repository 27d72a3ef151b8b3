//! Test-only mock provider with scripted behavior and a call counter.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::llm::{ChatMessage, GenerationParams, Provider, ProviderError};

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Succeed(String),
    FailApi { status: u16, message: String },
    FailAuth { status: u16, message: String },
    FailEmpty,
}

pub struct MockProvider {
    name: &'static str,
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(name: &'static str, behavior: MockBehavior) -> Self {
        Self {
            name,
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(
        &self,
        _system: &str,
        _messages: &[ChatMessage],
        _params: GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Succeed(text) => Ok(text.clone()),
            MockBehavior::FailApi { status, message } => Err(ProviderError::Api {
                status: *status,
                message: message.clone(),
            }),
            MockBehavior::FailAuth { status, message } => Err(ProviderError::AuthRejected {
                status: *status,
                message: message.clone(),
            }),
            MockBehavior::FailEmpty => Err(ProviderError::EmptyText),
        }
    }
}
