//! Durations, clocks, time points and the proleptic Gregorian calendar.

mod calendar_error;
mod clock;
mod day;
mod duration;
mod duration_rep;
mod hh_mm_ss;
mod misc;
mod month;
mod month_day;
mod month_weekday;
mod operators;
mod time_point;
#[cfg(feature = "_tracing-tree")]
mod tracing_tree_timer;
mod weekday;
mod year;
mod year_month;
mod year_month_day;
mod year_month_weekday;

pub use calendar_error::CalendarError;
#[cfg(feature = "std")]
pub use clock::std_ticks;
pub use clock::{
  Clock, HighResolutionClock, HighResolutionClockDuration, SteadyClock, SteadyClockDuration,
  SystemClock, SystemClockDuration, clock_cast,
};
pub use day::Day;
pub use duration::{
  Days, Duration, Hours, IsDuration, Microseconds, Milliseconds, Minutes, Months, Nanoseconds,
  Seconds, Weeks, Years, duration_cast,
};
pub use duration_rep::DurationRep;
pub use hh_mm_ss::{HhMmSs, is_am, is_pm, make12, make24};
pub use month::Month;
pub use month_day::{MonthDay, MonthDayLast};
pub use month_weekday::{MonthWeekday, MonthWeekdayLast};
pub use time_point::{SysDays, SysSeconds, SysTime, TimePoint, time_point_cast};
#[cfg(feature = "_tracing-tree")]
pub use tracing_tree_timer::TracingTreeTimer;
pub use weekday::{Last, Weekday, WeekdayIndexed, WeekdayLast};
pub use year::Year;
pub use year_month::YearMonth;
pub use year_month_day::{YearMonthDay, YearMonthDayLast};
pub use year_month_weekday::{YearMonthWeekday, YearMonthWeekdayLast};

/// Days of each month in a non-leap year. Index `0` is a placeholder so that months can be used
/// directly as indices.
pub(crate) const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days of `month` in a leap or non-leap year. Zero for invalid months.
pub(crate) const fn days_in_month(month: u8, is_leap: bool) -> u8 {
  if month == 0 || month > 12 {
    return 0;
  }
  let days = DAYS_IN_MONTH[misc::u8usize(month)];
  if is_leap && month == 2 { days.wrapping_add(1) } else { days }
}

pub(crate) const fn days_in_year(is_leap: bool) -> i32 {
  if is_leap { 366 } else { 365 }
}

pub(crate) const fn is_leap_year(year: i32) -> bool {
  (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
