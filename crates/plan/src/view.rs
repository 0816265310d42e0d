use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use crate::calendar::HolidayCalendar;
use crate::types::{EventNote, MealRecord, MealSlot};

/// Where a day's effective note comes from. Later merge stages replace
/// earlier ones; a persisted empty note suppresses the holiday default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NoteSource {
    #[default]
    Absent,
    Holiday(String),
    Persisted(String),
}

impl NoteSource {
    pub fn effective(&self) -> Option<&str> {
        match self {
            NoteSource::Absent => None,
            NoteSource::Holiday(label) => Some(label),
            NoteSource::Persisted(note) if note.is_empty() => None,
            NoteSource::Persisted(note) => Some(note),
        }
    }
}

/// Read projection for one date. Rebuilt on every refresh, never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
    pub note: Option<String>,
}

impl DayView {
    pub fn slot(&self, slot: MealSlot) -> Option<&str> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_deref(),
            MealSlot::Lunch => self.lunch.as_deref(),
            MealSlot::Dinner => self.dinner.as_deref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<String> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }
}

/// Merges holiday defaults, meal records and persisted notes into one view
/// per date. Precedence applies to the note field only: holiday seed first,
/// persisted note last. Records dated outside `dates` are ignored. Every
/// date in `dates` gets a view, if only an empty one.
pub fn build_week_view(
    dates: &[Date],
    holidays: &HolidayCalendar,
    meals: &[MealRecord],
    notes: &[EventNote],
) -> BTreeMap<Date, DayView> {
    let mut sources: BTreeMap<Date, NoteSource> = dates
        .iter()
        .map(|&date| {
            let source = holidays.label(date).map_or(NoteSource::Absent, |label| {
                NoteSource::Holiday(label.to_owned())
            });

            (date, source)
        })
        .collect();

    let mut views: BTreeMap<Date, DayView> = dates
        .iter()
        .map(|&date| (date, DayView::default()))
        .collect();

    for record in meals {
        if let Some(view) = views.get_mut(&record.key.date) {
            *view.slot_mut(record.key.slot) = Some(record.description.clone());
        }
    }

    for note in notes {
        if let Some(source) = sources.get_mut(&note.date) {
            *source = NoteSource::Persisted(note.note.clone());
        }
    }

    for (date, view) in views.iter_mut() {
        view.note = sources[date].effective().map(str::to_owned);
    }

    views
}
