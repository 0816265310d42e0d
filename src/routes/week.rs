use axum::{
    Json,
    extract::{Query, State},
};
use mealboard_plan::{DayView, encode_date};
use serde::{Deserialize, Serialize};
use time::Duration;

use super::AppState;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct WeekParams {
    anchor: Option<String>,
}

#[derive(Serialize)]
pub struct DayEntry {
    pub date: String,
    pub weekday: String,
    #[serde(flatten)]
    pub view: DayView,
}

#[derive(Serialize)]
pub struct WeekResponse {
    pub start: String,
    pub end: String,
    pub days: Vec<DayEntry>,
}

/// GET /api/week - the merged seven-day view for the week containing
/// `anchor`, defaulting to today. Week navigation is just a different
/// anchor.
pub async fn get_week(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> Result<Json<WeekResponse>, AppError> {
    let anchor = match params.anchor {
        Some(raw) => super::parse_date_param(&raw)?,
        None => time::OffsetDateTime::now_utc().date(),
    };

    let (start, views) = state.planner.week_view(anchor).await?;

    let days = views
        .into_iter()
        .map(|(date, view)| DayEntry {
            date: encode_date(date),
            weekday: date.weekday().to_string(),
            view,
        })
        .collect();

    Ok(Json(WeekResponse {
        start: encode_date(start),
        end: encode_date(start + Duration::days(6)),
        days,
    }))
}

#[derive(Deserialize)]
pub struct CopyWeekBody {
    week_start: String,
}

#[derive(Serialize)]
pub struct CopyWeekResponse {
    pub copied: usize,
}

/// POST /api/week/copy - duplicate the previous week's meals into the given
/// week. The UI confirms with the user first; destination slots are
/// overwritten.
pub async fn post_copy_week(
    State(state): State<AppState>,
    Json(body): Json<CopyWeekBody>,
) -> Result<Json<CopyWeekResponse>, AppError> {
    let week_start = mealboard_plan::start_of_week(super::parse_date_param(&body.week_start)?);
    let copied = state.planner.copy_last_week(week_start).await?;

    Ok(Json(CopyWeekResponse { copied }))
}
