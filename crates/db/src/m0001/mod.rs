mod event;
mod meal;
mod site_stat;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealboard",
    "m0001",
    vec_box![],
    vec_box![
        meal::CreateTable,
        event::CreateTable,
        site_stat::CreateTable
    ]
);
