use axum::{Json, extract::State};
use serde_json::{Value, json};

use super::AppState;

/// POST /api/visit - bump the landing-page counter. A failed counter only
/// degrades the number shown, never the page.
pub async fn post_visit(State(state): State<AppState>) -> Json<Value> {
    let visits = match state.planner.store().record_visit().await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!("could not update visit count: {err}");
            0
        }
    };

    Json(json!({ "visits": visits }))
}
