pub mod calendar;
pub mod reading;
pub mod series;

pub use calendar::{canonical_calendar_days, is_leap_day, month_start_indices, CalendarDayKey};
pub use reading::{NormalizedReading, RawReading};
pub use series::{DailyExtremes, DailySeries, Extreme, PreparedSeries, RecordFlags};
