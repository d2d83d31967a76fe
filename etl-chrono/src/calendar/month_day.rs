
use crate::{
  calendar::{
    CalendarError, Day, DAYS_IN_MONTH, Month,
    misc::{u8u32, u8usize},
  },
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// A day of a specific month, not tied to any year.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MonthDay {
  month: Month,
  day: Day,
}

impl MonthDay {
  /// Creates a new instance from a valid month and day.
  #[inline]
  pub const fn from_parts(month: Month, day: Day) -> Result<Self, CalendarError> {
    if !month.ok() {
      return Err(CalendarError::InvalidMonth { received: month.num() });
    }
    let this = Self { month, day };
    if !this.ok() {
      return Err(CalendarError::InvalidDay { received: day.num() });
    }
    Ok(this)
  }

  /// Unchecked instance.
  #[inline]
  pub const fn new(month: Month, day: Day) -> Self {
    Self { month, day }
  }

  /// Orders by month and then by day.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.month.compare(other.month) {
      Ordering::Equal => self.day.compare(other.day),
      ordering => ordering,
    }
  }

  /// Day
  #[inline]
  pub const fn day(self) -> Day {
    self.day
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// If both fields are valid and the day exists in the month. February is capped at 28 days
  /// because there is no year to look at.
  #[inline]
  pub const fn ok(self) -> bool {
    self.month.ok() && self.day.ok() && self.day.num() <= DAYS_IN_MONTH[u8usize(self.month.num())]
  }
}

impl ByteHash for MonthDay {
  #[inline]
  fn byte_hash(&self) -> usize {
    let [a, b, c, d] = u8u32(self.month.num()).to_ne_bytes();
    let [e, f, g, h] = u8u32(self.day.num()).to_ne_bytes();
    generic_hash(&[a, b, c, d, e, f, g, h])
  }
}

/// The last day of a specific month, not tied to any year.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MonthDayLast {
  month: Month,
}

impl MonthDayLast {
  /// Instance of `month`.
  #[inline]
  pub const fn new(month: Month) -> Self {
    Self { month }
  }

  /// Orders by month.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    self.month.compare(other.month)
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// If the month is valid.
  #[inline]
  pub const fn ok(self) -> bool {
    self.month.ok()
  }
}

impl ByteHash for MonthDayLast {
  #[inline]
  fn byte_hash(&self) -> usize {
    self.month.byte_hash()
  }
}
