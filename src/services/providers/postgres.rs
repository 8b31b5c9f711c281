use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Group, GroupRow},
    services::providers::{GroupProvider, UserPreferenceProvider},
};

/// Group corpus backed by the `groups` table
#[derive(Clone)]
pub struct PgGroupProvider {
    pool: PgPool,
}

impl PgGroupProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupProvider for PgGroupProvider {
    async fn fetch_groups(&self) -> AppResult<Vec<Group>> {
        // ORDER BY keeps snapshot row order stable across retrains.
        let rows: Vec<GroupRow> =
            sqlx::query_as(r#"SELECT id, name, genres, main_image_url FROM groups ORDER BY id"#)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Group::try_from).collect()
    }
}

/// User genre interests backed by the `users` table
#[derive(Clone)]
pub struct PgUserPreferenceProvider {
    pool: PgPool,
}

impl PgUserPreferenceProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserPreferenceProvider for PgUserPreferenceProvider {
    async fn fetch_genres_of_interest(&self, user_id: i64) -> AppResult<Option<String>> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as(r#"SELECT genres_of_interest FROM users WHERE id = $1"#)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        // NULL preferences on an existing user are present-but-empty,
        // not a missing user.
        Ok(row.map(|(genres,)| genres.unwrap_or_default()))
    }
}
