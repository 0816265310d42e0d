use std::collections::BTreeMap;

use strum::VariantArray;
use time::{Date, Duration};

use crate::calendar::HolidayCalendar;
use crate::error::PlanError;
use crate::store::PlanStore;
use crate::types::{DayInput, EventNote, MealKey, MealRecord, MealSlot, PlanWrite, encode_date};
use crate::view::{DayView, build_week_view};
use crate::week::{start_of_week, week_dates};

/// Composition layer over the store and the holiday calendar. Owns no other
/// state; every week view is rebuilt from storage on request.
#[derive(Clone)]
pub struct Planner {
    store: PlanStore,
    holidays: HolidayCalendar,
}

impl Planner {
    pub fn new(store: PlanStore, holidays: HolidayCalendar) -> Self {
        Self { store, holidays }
    }

    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// Fetches and merges the week containing `anchor`. Returns the week
    /// start alongside the per-date views so callers can label navigation.
    #[tracing::instrument(skip(self))]
    pub async fn week_view(
        &self,
        anchor: Date,
    ) -> Result<(Date, BTreeMap<Date, DayView>), PlanError> {
        let start = start_of_week(anchor);
        let dates = week_dates(start);
        let (meals, notes) = self.store.fetch_range(dates[0], dates[6]).await?;

        Ok((start, build_week_view(&dates, &self.holidays, &meals, &notes)))
    }

    /// Persists one day's form in a single atomic batch: all three meal
    /// slots, plus the note when the input carries one. An empty note is a
    /// deliberate override of the holiday default and is written as such.
    #[tracing::instrument(skip(self, input))]
    pub async fn save_day(&self, date: Date, input: DayInput) -> Result<(), PlanError> {
        let mut writes = Vec::with_capacity(MealSlot::VARIANTS.len() + 1);

        for &slot in MealSlot::VARIANTS {
            writes.push(PlanWrite::Meal(MealRecord {
                key: MealKey {
                    member_id: self.store.member_id().to_owned(),
                    date,
                    slot,
                },
                description: input.slot(slot).unwrap_or_default().to_owned(),
            }));
        }

        if let Some(note) = input.note.clone() {
            writes.push(PlanWrite::Note(EventNote { date, note }));
        }

        self.store.upsert_batch(&writes).await
    }

    /// Copies every meal of the week before `current_week_start` into the
    /// current week, shifting each record by exactly seven days. Destination
    /// slots are overwritten; notes are not copied. Fails with
    /// [`PlanError::NoData`] before any write when the source week is empty.
    #[tracing::instrument(skip(self))]
    pub async fn copy_last_week(&self, current_week_start: Date) -> Result<usize, PlanError> {
        let source_start = current_week_start - Duration::weeks(1);
        let source_dates = week_dates(source_start);
        let meals = self
            .store
            .fetch_meals(source_dates[0], source_dates[6])
            .await?;

        if meals.is_empty() {
            return Err(PlanError::NoData);
        }

        let writes: Vec<PlanWrite> = meals
            .into_iter()
            .map(|record| {
                PlanWrite::Meal(MealRecord {
                    key: MealKey {
                        date: record.key.date + Duration::weeks(1),
                        ..record.key
                    },
                    description: record.description,
                })
            })
            .collect();

        self.store.upsert_batch(&writes).await?;

        tracing::info!(
            copied = writes.len(),
            week = %encode_date(current_week_start),
            "copied previous week's meals"
        );

        Ok(writes.len())
    }
}
