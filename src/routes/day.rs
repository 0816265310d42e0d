use axum::{Json, extract::State};
use mealboard_plan::DayInput;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct SaveDayBody {
    date: String,
    #[serde(flatten)]
    day: DayInput,
}

/// POST /api/day - persist one day's meals and note as a single atomic
/// batch. The response only confirms the commit; the client refreshes the
/// week view afterwards.
pub async fn post_day(
    State(state): State<AppState>,
    Json(body): Json<SaveDayBody>,
) -> Result<Json<Value>, AppError> {
    let date = super::parse_date_param(&body.date)?;
    state.planner.save_day(date, body.day).await?;

    Ok(Json(json!({ "status": "saved" })))
}
