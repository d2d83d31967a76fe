//! Short constructors for calendar fields and durations.
//!
//! ```
//! use etl_chrono::literals::*;
//!
//! let date = y(2000) / month(2) / d(10);
//! assert_eq!(date.to_sys_days().time_since_epoch().count(), 10_997);
//! assert_eq!(h(1) + min(30), min(90));
//! ```

use crate::calendar::{
  Day, Hours, Microseconds, Milliseconds, Minutes, Month, Nanoseconds, Seconds, Weekday, Year,
};

/// Day of the month.
#[inline]
pub const fn d(num: u32) -> Day {
  Day::new(num)
}

/// Hours
#[inline]
pub const fn h(num: i32) -> Hours {
  Hours::new(num)
}

/// Minutes
#[inline]
pub const fn min(num: i32) -> Minutes {
  Minutes::new(num)
}

/// Month of the year.
#[inline]
pub const fn month(num: u32) -> Month {
  Month::new(num)
}

/// Milliseconds
#[inline]
pub const fn ms(num: i64) -> Milliseconds {
  Milliseconds::new(num)
}

/// Nanoseconds
#[inline]
pub const fn ns(num: i64) -> Nanoseconds {
  Nanoseconds::new(num)
}

/// Seconds
#[inline]
pub const fn s(num: i64) -> Seconds {
  Seconds::new(num)
}

/// Microseconds
#[inline]
pub const fn us(num: i64) -> Microseconds {
  Microseconds::new(num)
}

/// Day of the week, `0` and `7` are Sunday.
#[inline]
pub const fn weekday(num: u32) -> Weekday {
  Weekday::new(num)
}

/// Year
#[inline]
pub const fn y(num: i32) -> Year {
  Year::new(num)
}
