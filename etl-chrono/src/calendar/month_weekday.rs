
use crate::{
  calendar::{Month, WeekdayIndexed, WeekdayLast, misc::u8u32},
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// The n-th weekday of a specific month, not tied to any year.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MonthWeekday {
  month: Month,
  weekday_indexed: WeekdayIndexed,
}

impl MonthWeekday {
  /// Unchecked instance.
  #[inline]
  pub const fn new(month: Month, weekday_indexed: WeekdayIndexed) -> Self {
    Self { month, weekday_indexed }
  }

  /// Orders by month and then by indexed weekday.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.month.compare(other.month) {
      Ordering::Equal => self.weekday_indexed.compare(other.weekday_indexed),
      ordering => ordering,
    }
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// If both fields are valid.
  #[inline]
  pub const fn ok(self) -> bool {
    self.month.ok() && self.weekday_indexed.ok()
  }

  /// Indexed weekday
  #[inline]
  pub const fn weekday_indexed(self) -> WeekdayIndexed {
    self.weekday_indexed
  }
}

impl ByteHash for MonthWeekday {
  #[inline]
  fn byte_hash(&self) -> usize {
    let [a, b, c, d] = u8u32(self.month.num()).to_ne_bytes();
    let [e, f, g, h] = u8u32(self.weekday_indexed.weekday().c_encoding()).to_ne_bytes();
    let [i, j, k, l] = u8u32(self.weekday_indexed.index()).to_ne_bytes();
    generic_hash(&[a, b, c, d, e, f, g, h, i, j, k, l])
  }
}

/// The last weekday of a specific month, not tied to any year.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MonthWeekdayLast {
  month: Month,
  weekday_last: WeekdayLast,
}

impl MonthWeekdayLast {
  /// Unchecked instance.
  #[inline]
  pub const fn new(month: Month, weekday_last: WeekdayLast) -> Self {
    Self { month, weekday_last }
  }

  /// Orders by month and then by weekday.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.month.compare(other.month) {
      Ordering::Equal => self.weekday_last.compare(other.weekday_last),
      ordering => ordering,
    }
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// If both fields are valid.
  #[inline]
  pub const fn ok(self) -> bool {
    self.month.ok() && self.weekday_last.ok()
  }

  /// Last weekday
  #[inline]
  pub const fn weekday_last(self) -> WeekdayLast {
    self.weekday_last
  }
}

impl ByteHash for MonthWeekdayLast {
  #[inline]
  fn byte_hash(&self) -> usize {
    let [a, b, c, d] = u8u32(self.month.num()).to_ne_bytes();
    let [e, f, g, h] = u8u32(self.weekday_last.weekday().c_encoding()).to_ne_bytes();
    generic_hash(&[a, b, c, d, e, f, g, h])
  }
}
