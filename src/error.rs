use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("corpus is empty: no groups or genre tokens to index")]
    EmptyCorpus,

    #[error("model is not trained yet")]
    ModelNotTrained,

    #[error("user {0} not found")]
    UserNotFound(i64),

    #[error("database error: {0}")]
    Provider(#[from] sqlx::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ModelNotTrained => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyCorpus => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
