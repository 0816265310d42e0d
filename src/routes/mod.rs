use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

mod day;
mod health;
mod stats;
mod week;

#[derive(Clone)]
pub struct AppState {
    pub planner: mealboard_plan::Planner,
    pub pool: SqlitePool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state.pool.clone())
        .merge(
            Router::new()
                .route("/api/week", get(week::get_week))
                .route("/api/week/copy", post(week::post_copy_week))
                .route("/api/day", post(day::post_day))
                .route("/api/visit", post(stats::post_visit))
                .with_state(state),
        )
        .layer(TraceLayer::new_for_http())
}

pub(crate) fn parse_date_param(raw: &str) -> Result<time::Date, AppError> {
    mealboard_plan::decode_date(raw)
        .map_err(|_| AppError::Validation(format!("invalid date {raw:?}, expected YYYY-MM-DD")))
}
