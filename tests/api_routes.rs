use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use temp_dir::TempDir;
use tower::ServiceExt;

mod helpers;

async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(serde_json::from_slice(&bytes)?)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_and_ready_answer() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn week_view_covers_seven_days_and_seeds_holidays() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3")).await?;

    // Diwali week, anchored mid-week.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/week?anchor=2026-11-04")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["start"], "2026-11-02");
    assert_eq!(body["end"], "2026-11-08");

    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2026-11-02");
    assert_eq!(days[0]["weekday"], "Monday");
    assert_eq!(days[6]["date"], "2026-11-08");
    assert_eq!(days[6]["note"], "Diwali");
    assert_eq!(days[0]["breakfast"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn saved_day_shows_up_in_the_week_view() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/day",
            json!({
                "date": "2026-01-07",
                "breakfast": "Poha",
                "lunch": "Dal chawal",
                "dinner": "Paneer",
                "note": "PTA meeting"
            }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/week?anchor=2026-01-07")
                .body(Body::empty())?,
        )
        .await?;
    let body = body_json(response).await?;

    let wednesday = &body["days"].as_array().unwrap()[2];
    assert_eq!(wednesday["date"], "2026-01-07");
    assert_eq!(wednesday["breakfast"], "Poha");
    assert_eq!(wednesday["lunch"], "Dal chawal");
    assert_eq!(wednesday["dinner"], "Paneer");
    assert_eq!(wednesday["note"], "PTA meeting");

    Ok(())
}

#[tokio::test]
async fn copy_with_empty_source_week_returns_conflict() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = app
        .oneshot(post_json(
            "/api/week/copy",
            json!({ "week_start": "2026-01-12" }),
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await?;
    assert_eq!(body["error"], "No meals found in last week to copy.");

    Ok(())
}

#[tokio::test]
async fn copy_moves_last_week_forward() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/day",
            json!({ "date": "2026-01-05", "breakfast": "Idli" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/week/copy",
            json!({ "week_start": "2026-01-12" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["copied"], 3);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/week?anchor=2026-01-12")
                .body(Body::empty())?,
        )
        .await?;
    let body = body_json(response).await?;
    assert_eq!(body["days"][0]["date"], "2026-01-12");
    assert_eq!(body["days"][0]["breakfast"], "Idli");

    Ok(())
}

#[tokio::test]
async fn malformed_dates_are_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/week?anchor=today")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .oneshot(post_json(
            "/api/day",
            json!({ "date": "07-01-2026", "lunch": "Kadhi" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn visit_counter_increments_per_call() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3")).await?;

    let first = body_json(app.clone().oneshot(post_json("/api/visit", json!({}))).await?).await?;
    let second = body_json(app.oneshot(post_json("/api/visit", json!({}))).await?).await?;

    assert_eq!(first["visits"], 1);
    assert_eq!(second["visits"], 2);

    Ok(())
}
