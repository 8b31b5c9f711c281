use std::sync::Arc;

use crate::services::RecommendationService;

/// Shared application state
///
/// The recommendation service owns the engine and providers; handlers and
/// the scheduler share the same instance, so every reader queries the same
/// current generation.
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
}

impl AppState {
    pub fn new(recommendations: Arc<RecommendationService>) -> Self {
        Self { recommendations }
    }
}
