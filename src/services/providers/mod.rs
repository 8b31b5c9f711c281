//! External data providers
//!
//! The engine never talks to the database directly: it consumes a group
//! corpus and per-user genre preferences through these traits, which keeps
//! the training and query paths testable against mocks.

use async_trait::async_trait;

use crate::{error::AppResult, models::Group};

pub mod postgres;

/// Source of the group corpus used to train the model
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupProvider: Send + Sync {
    /// Fetch a snapshot of all groups, in a stable order
    async fn fetch_groups(&self) -> AppResult<Vec<Group>>;
}

/// Source of per-user genre interests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserPreferenceProvider: Send + Sync {
    /// Fetch the user's comma-separated genres of interest
    ///
    /// `None` means the user does not exist. A present user with no stored
    /// preferences yields `Some("")` — absence and emptiness are distinct.
    async fn fetch_genres_of_interest(&self, user_id: i64) -> AppResult<Option<String>>;
}
