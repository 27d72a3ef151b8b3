use crate::config::Config;
use crate::llm::chain::ProviderChain;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub chain: ProviderChain,
    pub config: Config,
}
