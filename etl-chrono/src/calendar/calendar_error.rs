/// Calendar error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalendarError {
  /// Underlying time structure couldn't hold the value generated during an arithmetic operation.
  ArithmeticOverflow,
  /// The day doesn't exist in the given year and month.
  InvalidDate {
    /// Received year
    year: i16,
    /// Received month
    month: u8,
    /// Received day
    day: u8,
  },
  /// A month can only have up to 31 days
  InvalidDay {
    /// Invalid received number
    received: u8,
  },
  /// A year has twelve months
  InvalidMonth {
    /// Invalid received number
    received: u8,
  },
  /// Weekdays are encoded from `0` (Sunday) to `6` (Saturday), `7` is also accepted as Sunday.
  InvalidWeekday {
    /// Invalid received number
    received: u8,
  },
  /// A weekday can only occur up to five times in a month
  InvalidWeekdayIndex {
    /// Invalid received number
    received: u8,
  },
  /// The lowest representable year is reserved as an invalid marker
  InvalidYear {
    /// Invalid received number
    received: i16,
  },
}

impl core::fmt::Display for CalendarError {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    <Self as core::fmt::Debug>::fmt(self, f)
  }
}

impl core::error::Error for CalendarError {}
