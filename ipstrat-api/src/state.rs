use ipstrat_agents::{RateLimiter, Strategist};
use std::sync::Arc;

/// Shared handler state, cloned into every worker
#[derive(Clone)]
pub struct AppState {
    pub strategist: Option<Arc<Strategist>>,
    pub rate_limiter: Arc<RateLimiter>,
    /// Reported by `/health` even when no client exists
    pub model: String,
}

impl AppState {
    pub fn new(strategist: Option<Strategist>, rate_limiter: RateLimiter, model: impl Into<String>) -> Self {
        Self {
            strategist: strategist.map(Arc::new),
            rate_limiter: Arc::new(rate_limiter),
            model: model.into(),
        }
    }

    pub fn llm_available(&self) -> bool {
        self.strategist.is_some()
    }

    pub fn pipeline_available(&self) -> bool {
        self.strategist
            .as_ref()
            .is_some_and(|s| s.pipeline_available())
    }
}
