pub mod features;
pub mod knn;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::Group;

use features::Vocabulary;
use knn::{NeighborIndex, DEFAULT_K};

/// One complete training output
///
/// Binds the group snapshot to the vocabulary and index derived from it.
/// Row indices from the index are only meaningful against this snapshot;
/// values from different generations must never be mixed.
pub struct Generation {
    pub groups: Vec<Group>,
    pub vocabulary: Vocabulary,
    pub index: NeighborIndex,
    pub trained_at: DateTime<Utc>,
}

/// Nearest-neighbor recommendation model over group genre tags
///
/// The current generation is the only mutable shared state. `train` builds
/// a replacement off to the side and installs it with a single pointer swap;
/// `recommend` clones the `Arc` and queries off-lock, so readers always see
/// one fully consistent generation, old or new, never a mix.
#[derive(Clone, Default)]
pub struct RecommendationEngine {
    current: Arc<RwLock<Option<Arc<Generation>>>>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrains the model from a fresh group snapshot
    ///
    /// On success the new generation replaces the previous one whole. On
    /// failure the previous generation stays current and queryable; retrying
    /// is the scheduler's concern, not ours.
    pub async fn train(&self, groups: Vec<Group>) -> AppResult<usize> {
        let vocabulary = Vocabulary::fit(&groups);
        let index = NeighborIndex::build(vocabulary.matrix(&groups))?;

        debug!(
            groups = groups.len(),
            genres = vocabulary.len(),
            "built new model generation"
        );

        let generation = Arc::new(Generation {
            groups,
            vocabulary,
            index,
            trained_at: Utc::now(),
        });
        let trained = generation.groups.len();

        let mut current = self.current.write().await;
        *current = Some(generation);
        Ok(trained)
    }

    /// Returns the groups nearest to the user's genre interests, closest
    /// first
    ///
    /// Tokens unknown to the current vocabulary are dropped; a query with no
    /// known tokens encodes to the all-zero vector and simply ranks every
    /// group at maximal distance.
    pub async fn recommend(&self, user_genres: &[String]) -> AppResult<Vec<Group>> {
        let generation = self
            .current
            .read()
            .await
            .clone()
            .ok_or(AppError::ModelNotTrained)?;

        let vector = generation.vocabulary.encode(user_genres);
        let neighbors = generation.index.query(&vector, DEFAULT_K);

        Ok(neighbors
            .into_iter()
            .filter_map(|(row, _)| generation.groups.get(row).cloned())
            .collect())
    }

    /// Current generation, if any successful train has completed
    pub async fn current(&self) -> Option<Arc<Generation>> {
        self.current.read().await.clone()
    }
}
