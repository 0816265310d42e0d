use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Formats a calendar date the way it is stored and sent on the wire.
pub fn encode_date(date: Date) -> String {
    date.format(DATE_FORMAT).expect("static date format")
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn decode_date(input: &str) -> Result<Date, time::error::Parse> {
    Date::parse(input, DATE_FORMAT)
}

/// Fixed daily subdivision of a plan. The string forms double as the stored
/// `meal_type` values.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

/// Stable identity of a meal record. Kept as a value object rather than a
/// joined string so a member id containing a delimiter cannot collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MealKey {
    pub member_id: String,
    pub date: Date,
    pub slot: MealSlot,
}

/// One planned meal. An empty description is a persisted "cleared" state;
/// records are overwritten in place and never deleted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealRecord {
    pub key: MealKey,
    pub description: String,
}

/// Free-text note attached to a date, at most one per date. An empty note is
/// a stored override that suppresses the holiday default for that date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventNote {
    pub date: Date,
    pub note: String,
}

/// One write in a heterogeneous upsert batch.
#[derive(Clone, Debug)]
pub enum PlanWrite {
    Meal(MealRecord),
    Note(EventNote),
}

/// A single day's form input. `None` slots are saved as empty descriptions;
/// a `None` note leaves the stored note untouched, while `Some("")` blanks
/// it out deliberately.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DayInput {
    #[serde(default)]
    pub breakfast: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub dinner: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl DayInput {
    pub fn slot(&self, slot: MealSlot) -> Option<&str> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_deref(),
            MealSlot::Lunch => self.lunch.as_deref(),
            MealSlot::Dinner => self.dinner.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn date_round_trip() {
        let date = date!(2026 - 11 - 08);

        assert_eq!(encode_date(date), "2026-11-08");
        assert_eq!(decode_date("2026-11-08").unwrap(), date);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(decode_date("2026/11/08").is_err());
        assert!(decode_date("not-a-date").is_err());
    }

    #[test]
    fn meal_slot_string_forms() {
        assert_eq!(MealSlot::Breakfast.to_string(), "Breakfast");
        assert_eq!("Dinner".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
        assert!("Supper".parse::<MealSlot>().is_err());
    }

    #[test]
    fn meal_keys_compare_on_all_components() {
        let key = |slot| MealKey {
            member_id: "Family".to_owned(),
            date: date!(2026 - 01 - 05),
            slot,
        };

        assert_eq!(key(MealSlot::Lunch), key(MealSlot::Lunch));
        assert_ne!(key(MealSlot::Lunch), key(MealSlot::Dinner));
    }
}
