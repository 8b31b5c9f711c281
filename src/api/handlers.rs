use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::Group;

use super::AppState;

// Response types

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub trained_groups: usize,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub trained: bool,
    pub trained_at: Option<DateTime<Utc>>,
    pub groups: usize,
    pub genres: usize,
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub image_url: String,
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            genres: group.genres.clone(),
            image_url: group.image_url.clone(),
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Current model generation, for operators and the scheduler's logs
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    match state.recommendations.engine().current().await {
        Some(generation) => Json(StatusResponse {
            trained: true,
            trained_at: Some(generation.trained_at),
            groups: generation.groups.len(),
            genres: generation.vocabulary.len(),
        }),
        None => Json(StatusResponse {
            trained: false,
            trained_at: None,
            groups: 0,
            genres: 0,
        }),
    }
}

/// Retrain the model on demand from the current group corpus
pub async fn train(State(state): State<AppState>) -> AppResult<Json<TrainResponse>> {
    let trained_groups = state.recommendations.train().await?;
    Ok(Json(TrainResponse { trained_groups }))
}

/// Recommend groups for a user, closest match first
pub async fn recommend(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<GroupResponse>>> {
    let groups = state.recommendations.recommend_for_user(user_id).await?;
    Ok(Json(groups.iter().map(GroupResponse::from).collect()))
}
