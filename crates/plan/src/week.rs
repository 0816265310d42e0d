use time::{Date, Duration, Weekday};

/// Returns the Monday on or before the given date.
///
/// The week convention is fixed: Monday is day 0 regardless of locale, so a
/// Sunday maps to the Monday six days earlier.
pub fn start_of_week(date: Date) -> Date {
    let days_since_monday = match date.weekday() {
        Weekday::Monday => 0,
        Weekday::Tuesday => 1,
        Weekday::Wednesday => 2,
        Weekday::Thursday => 3,
        Weekday::Friday => 4,
        Weekday::Saturday => 5,
        Weekday::Sunday => 6,
    };

    date - Duration::days(days_since_monday)
}

/// Returns the seven consecutive dates of the week beginning at `start`.
pub fn week_dates(start: Date) -> [Date; 7] {
    std::array::from_fn(|i| start + Duration::days(i as i64))
}
