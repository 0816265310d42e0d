use mealboard_db::table::{Event, Meal, SiteStat};
use sea_query::{Expr, ExprTrait, InsertStatement, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::Date;

use crate::error::PlanError;
use crate::types::{EventNote, MealKey, MealRecord, MealSlot, PlanWrite, decode_date, encode_date};

const VISIT_KEY: &str = "status";

#[derive(FromRow)]
struct MealRow {
    member_id: String,
    date: String,
    meal_type: String,
    description: String,
}

impl MealRow {
    fn into_record(self) -> Result<MealRecord, PlanError> {
        let date = decode_date(&self.date)
            .map_err(|_| PlanError::Malformed(format!("meal date {:?}", self.date)))?;
        let slot = self
            .meal_type
            .parse::<MealSlot>()
            .map_err(|_| PlanError::Malformed(format!("meal type {:?}", self.meal_type)))?;

        Ok(MealRecord {
            key: MealKey {
                member_id: self.member_id,
                date,
                slot,
            },
            description: self.description,
        })
    }
}

#[derive(FromRow)]
struct EventRow {
    date: String,
    note: String,
}

/// Persistence handle for the plan tables. Reads run on the read pool;
/// batches run as single transactions on the write pool, which is expected
/// to hold one connection so writers are serialized.
#[derive(Clone)]
pub struct PlanStore {
    read_db: SqlitePool,
    write_db: SqlitePool,
    member_id: String,
}

impl PlanStore {
    pub fn new(
        read_db: SqlitePool,
        write_db: SqlitePool,
        member_id: impl Into<String>,
    ) -> Self {
        Self {
            read_db,
            write_db,
            member_id: member_id.into(),
        }
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// All meal records for the household member with dates in the inclusive
    /// range.
    pub async fn fetch_meals(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<MealRecord>, PlanError> {
        debug_assert!(start <= end);

        let statement = Query::select()
            .columns([Meal::MemberId, Meal::Date, Meal::MealType, Meal::Description])
            .from(Meal::Table)
            .and_where(Expr::col(Meal::MemberId).eq(&self.member_id))
            .and_where(Expr::col(Meal::Date).gte(encode_date(start)))
            .and_where(Expr::col(Meal::Date).lte(encode_date(end)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await
            .map_err(PlanError::Fetch)?;

        rows.into_iter().map(MealRow::into_record).collect()
    }

    /// Event notes in the inclusive range, best-effort. A fresh deployment
    /// may never have written a note, so any failure degrades to "no notes"
    /// instead of blocking the meal data.
    pub async fn fetch_notes(&self, start: Date, end: Date) -> Vec<EventNote> {
        debug_assert!(start <= end);

        let statement = Query::select()
            .columns([Event::Date, Event::Note])
            .from(Event::Table)
            .and_where(Expr::col(Event::Date).gte(encode_date(start)))
            .and_where(Expr::col(Event::Date).lte(encode_date(end)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = match sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await
        {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!("event notes unavailable: {err}");
                return Vec::new();
            }
        };

        rows.into_iter()
            .filter_map(|row| match decode_date(&row.date) {
                Ok(date) => Some(EventNote {
                    date,
                    note: row.note,
                }),
                Err(_) => {
                    tracing::warn!(date = %row.date, "skipping note with malformed date");
                    None
                }
            })
            .collect()
    }

    /// Meals and notes for the range in one call. Meal failures propagate;
    /// note failures have already degraded to an empty list.
    pub async fn fetch_range(
        &self,
        start: Date,
        end: Date,
    ) -> Result<(Vec<MealRecord>, Vec<EventNote>), PlanError> {
        let meals = self.fetch_meals(start, end).await?;
        let notes = self.fetch_notes(start, end).await;

        Ok((meals, notes))
    }

    /// Commits a heterogeneous batch of meal and note upserts in one
    /// transaction. Either every write takes effect or none do. Conflicting
    /// identities update only the value column, leaving the key columns as
    /// stored.
    pub async fn upsert_batch(&self, writes: &[PlanWrite]) -> Result<(), PlanError> {
        let mut tx = self.write_db.begin().await.map_err(PlanError::Commit)?;

        for write in writes {
            let statement = match write {
                PlanWrite::Meal(record) => upsert_meal(record),
                PlanWrite::Note(note) => upsert_note(note),
            };

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await
                .map_err(PlanError::Commit)?;
        }

        tx.commit().await.map_err(PlanError::Commit)
    }

    /// Bumps the site visit counter and returns the new total, creating the
    /// row on first visit.
    pub async fn record_visit(&self) -> Result<i64, PlanError> {
        let mut tx = self.write_db.begin().await.map_err(PlanError::Commit)?;

        let statement = Query::select()
            .column(SiteStat::Value)
            .from(SiteStat::Table)
            .and_where(Expr::col(SiteStat::Key).eq(VISIT_KEY))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let current: Option<(i64,)> = sqlx::query_as_with(&sql, values)
            .fetch_optional(&mut *tx)
            .await
            .map_err(PlanError::Fetch)?;

        let visits = current.map_or(1, |(value,)| value + 1);

        let mut statement = Query::insert()
            .into_table(SiteStat::Table)
            .columns([SiteStat::Key, SiteStat::Value])
            .to_owned();

        statement.values_panic([VISIT_KEY.into(), visits.into()]);
        statement.on_conflict(
            OnConflict::column(SiteStat::Key)
                .update_columns([SiteStat::Value])
                .to_owned(),
        );

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await
            .map_err(PlanError::Commit)?;

        tx.commit().await.map_err(PlanError::Commit)?;

        Ok(visits)
    }
}

fn upsert_meal(record: &MealRecord) -> InsertStatement {
    let mut statement = Query::insert()
        .into_table(Meal::Table)
        .columns([Meal::MemberId, Meal::Date, Meal::MealType, Meal::Description])
        .to_owned();

    statement.values_panic([
        record.key.member_id.clone().into(),
        encode_date(record.key.date).into(),
        record.key.slot.to_string().into(),
        record.description.clone().into(),
    ]);

    statement.on_conflict(
        OnConflict::columns([Meal::MemberId, Meal::Date, Meal::MealType])
            .update_columns([Meal::Description])
            .to_owned(),
    );

    statement
}

fn upsert_note(note: &EventNote) -> InsertStatement {
    let mut statement = Query::insert()
        .into_table(Event::Table)
        .columns([Event::Date, Event::Note])
        .to_owned();

    statement.values_panic([encode_date(note.date).into(), note.note.clone().into()]);

    statement.on_conflict(
        OnConflict::column(Event::Date)
            .update_columns([Event::Note])
            .to_owned(),
    );

    statement
}
