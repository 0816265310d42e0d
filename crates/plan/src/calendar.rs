use std::collections::HashMap;

use time::{Date, macros::date};

/// Deploy-time calendar of default day labels. Entries are immutable; a
/// persisted event note for the same date takes precedence in the merged
/// view.
#[derive(Clone, Debug, Default)]
pub struct HolidayCalendar {
    entries: HashMap<Date, String>,
}

impl HolidayCalendar {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Date, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(date, label)| (date, label.into()))
                .collect(),
        }
    }

    /// Major Indian festivals and public holidays for 2026.
    pub fn year_2026() -> Self {
        Self::from_entries([
            (date!(2026 - 01 - 01), "New Year's Day"),
            (date!(2026 - 01 - 14), "Makar Sankranti / Pongal"),
            (date!(2026 - 01 - 26), "Republic Day"),
            (date!(2026 - 02 - 15), "Maha Shivaratri"),
            (date!(2026 - 03 - 04), "Holi"),
            (date!(2026 - 03 - 19), "Ugadi / Gudi Padwa"),
            (date!(2026 - 03 - 26), "Ram Navami"),
            (date!(2026 - 03 - 30), "Eid al-Fitr"),
            (date!(2026 - 03 - 31), "Mahavir Jayanti"),
            (date!(2026 - 04 - 03), "Good Friday"),
            (date!(2026 - 04 - 14), "Tamil New Year / Ambedkar Jayanti"),
            (date!(2026 - 05 - 01), "Buddha Purnima"),
            (date!(2026 - 05 - 27), "Eid al-Adha (Bakrid)"),
            (date!(2026 - 06 - 26), "Muharram"),
            (date!(2026 - 08 - 15), "Independence Day"),
            (date!(2026 - 08 - 28), "Raksha Bandhan"),
            (date!(2026 - 09 - 04), "Janmashtami"),
            (date!(2026 - 09 - 14), "Ganesh Chaturthi"),
            (date!(2026 - 10 - 02), "Gandhi Jayanti"),
            (date!(2026 - 10 - 10), "Navratri Starts"),
            (date!(2026 - 10 - 20), "Dussehra / Vijayadashami"),
            (date!(2026 - 11 - 08), "Diwali"),
            (date!(2026 - 11 - 24), "Guru Nanak Jayanti"),
            (date!(2026 - 12 - 25), "Christmas"),
        ])
    }

    pub fn label(&self, date: Date) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_festival_lookup() {
        let calendar = HolidayCalendar::year_2026();

        assert_eq!(calendar.label(date!(2026 - 11 - 08)), Some("Diwali"));
        assert_eq!(calendar.label(date!(2026 - 11 - 09)), None);
    }

    #[test]
    fn custom_entries() {
        let calendar = HolidayCalendar::from_entries([(date!(2026 - 07 - 04), "Cookout")]);

        assert_eq!(calendar.label(date!(2026 - 07 - 04)), Some("Cookout"));
    }
}
