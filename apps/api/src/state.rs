use std::sync::Arc;

use crate::advisor::CareerAdvisor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// No database, cache, or session store: every computation is transient.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable career advisor. Default: OpenAiAdvisor. Tests substitute fakes.
    pub advisor: Arc<dyn CareerAdvisor>,
    #[allow(dead_code)]
    pub config: Config,
}
