use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Text generation backend. Default: `LlmClient` against the Anthropic API.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
