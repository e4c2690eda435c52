use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::store::EntityStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable entity store. Production: `PgEntityStore`.
    pub store: Arc<dyn EntityStore>,
    pub llm: LlmClient,
    pub config: Config,
}
