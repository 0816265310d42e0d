use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealboard_plan::PlanError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Plan(PlanError::NoData) => (
                StatusCode::CONFLICT,
                "No meals found in last week to copy.".to_string(),
            ),
            AppError::Plan(err @ (PlanError::Fetch(_) | PlanError::Malformed(_))) => {
                tracing::error!("failed to load week data: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load meal data. Please try again later.".to_string(),
                )
            }
            AppError::Plan(err @ PlanError::Commit(_)) => {
                tracing::error!("failed to commit plan batch: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save data. Nothing was applied.".to_string(),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
