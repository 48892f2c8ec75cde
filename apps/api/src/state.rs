use std::sync::Arc;

use crate::config::Config;
use crate::enhance::ContentEnhancer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable content enhancer. Default: LlmEnhancer over the Anthropic API;
    /// tests swap in a stub.
    pub enhancer: Arc<dyn ContentEnhancer>,
    pub config: Config,
}
