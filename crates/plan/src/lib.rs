mod calendar;
mod error;
mod planner;
mod store;
mod types;
mod view;
mod week;

pub use calendar::HolidayCalendar;
pub use error::PlanError;
pub use planner::Planner;
pub use store::PlanStore;
pub use types::*;
pub use view::{DayView, NoteSource, build_week_view};
pub use week::{start_of_week, week_dates};
