use std::path::PathBuf;
use std::str::FromStr;

use mealboard_plan::{HolidayCalendar, PlanStore, Planner};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealboard_db::migrator::<sqlx::Sqlite>()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub async fn setup_planner(path: PathBuf) -> anyhow::Result<(Planner, SqlitePool)> {
    let pool = setup_pool(path).await?;
    let store = PlanStore::new(pool.clone(), pool.clone(), "Family");

    Ok((Planner::new(store, HolidayCalendar::year_2026()), pool))
}
