use std::path::PathBuf;
use std::str::FromStr;

use axum::Router;
use mealboard::routes::{self, AppState};
use mealboard_plan::{HolidayCalendar, PlanStore, Planner};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_app(path: PathBuf) -> anyhow::Result<Router> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealboard_db::migrator::<sqlx::Sqlite>()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    let store = PlanStore::new(pool.clone(), pool.clone(), "Family");
    let planner = Planner::new(store, HolidayCalendar::year_2026());

    Ok(routes::router(AppState { planner, pool }))
}
