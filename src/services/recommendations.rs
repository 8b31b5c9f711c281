use std::sync::Arc;

use tracing::info;

use crate::engine::RecommendationEngine;
use crate::error::{AppError, AppResult};
use crate::models::Group;
use crate::services::providers::{GroupProvider, UserPreferenceProvider};

/// Ties the data providers to the recommendation engine
///
/// Training pulls a fresh group snapshot from the group provider; queries
/// resolve a user's stored genre interests and ask the engine for the
/// nearest groups.
pub struct RecommendationService {
    engine: RecommendationEngine,
    groups: Arc<dyn GroupProvider>,
    preferences: Arc<dyn UserPreferenceProvider>,
}

impl RecommendationService {
    pub fn new(
        groups: Arc<dyn GroupProvider>,
        preferences: Arc<dyn UserPreferenceProvider>,
    ) -> Self {
        Self {
            engine: RecommendationEngine::new(),
            groups,
            preferences,
        }
    }

    /// Fetches the group corpus and retrains the model
    ///
    /// A failed fetch or an empty corpus leaves the current model untouched;
    /// the error is returned to the caller. Returns the number of groups
    /// the new generation was trained on.
    pub async fn train(&self) -> AppResult<usize> {
        let groups = self.groups.fetch_groups().await?;
        let trained = self.engine.train(groups).await?;
        info!(groups = trained, "model trained");
        Ok(trained)
    }

    /// Recommends groups for a user based on their stored genre interests
    pub async fn recommend_for_user(&self, user_id: i64) -> AppResult<Vec<Group>> {
        let raw = self
            .preferences
            .fetch_genres_of_interest(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        let user_genres = parse_genre_list(&raw);
        self.engine.recommend(&user_genres).await
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }
}

/// Splits a stored comma-separated preference string into genre tokens
///
/// Tokens are trimmed; empty segments are dropped, so `""` parses to no
/// tokens at all.
fn parse_genre_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
