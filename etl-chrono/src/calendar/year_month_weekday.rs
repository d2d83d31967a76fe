#[cfg(test)]
mod tests;

use crate::{
  calendar::{
    Days, Month, MonthDayLast, Months, SysDays, Weekday, WeekdayIndexed, WeekdayLast, Year,
    YearMonthDay, YearMonthDayLast, Years,
    misc::u8u32,
  },
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// The n-th weekday of a specific month of a specific year.
// TODO: conversion into `SysDays`, indices that overflow the month need a defined resolution
// first.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonthWeekday {
  year: Year,
  month: Month,
  weekday_indexed: WeekdayIndexed,
}

impl YearMonthWeekday {
  /// The occurrence of the weekday of a day count since 1970-01-01 within its month.
  #[inline]
  pub const fn from_sys_days(sys_days: SysDays) -> Self {
    let ymd = YearMonthDay::from_sys_days(sys_days);
    let index = (ymd.day().num().wrapping_sub(1) / 7).wrapping_add(1);
    Self {
      year: ymd.year(),
      month: ymd.month(),
      weekday_indexed: WeekdayIndexed::new(Weekday::from_sys_days(sys_days), u8u32(index)),
    }
  }

  /// Unchecked instance.
  #[inline]
  pub const fn new(year: Year, month: Month, weekday_indexed: WeekdayIndexed) -> Self {
    Self { year, month, weekday_indexed }
  }

  /// Orders by year, then by month and then by indexed weekday.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.year.compare(other.year) {
      Ordering::Equal => match self.month.compare(other.month) {
        Ordering::Equal => self.weekday_indexed.compare(other.weekday_indexed),
        ordering => ordering,
      },
      ordering => ordering,
    }
  }

  /// Occurrence within the month.
  #[inline]
  pub const fn index(self) -> u8 {
    self.weekday_indexed.index()
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// If all fields are valid.
  #[inline]
  pub const fn ok(self) -> bool {
    self.year.ok() && self.month.ok() && self.weekday_indexed.ok()
  }

  /// Weekday
  #[inline]
  pub const fn weekday(self) -> Weekday {
    self.weekday_indexed.weekday()
  }

  /// Indexed weekday
  #[inline]
  pub const fn weekday_indexed(self) -> WeekdayIndexed {
    self.weekday_indexed
  }

  /// Year
  #[inline]
  pub const fn year(self) -> Year {
    self.year
  }

  #[inline]
  pub(crate) const fn add_months(self, months: Months) -> Self {
    Self { month: self.month.add_months(months), ..self }
  }

  #[inline]
  pub(crate) const fn add_years(self, years: Years) -> Self {
    Self { year: self.year.add_years(years), ..self }
  }
}

impl ByteHash for YearMonthWeekday {
  #[inline]
  fn byte_hash(&self) -> usize {
    hash_parts(self.year, self.month, self.weekday())
  }
}

impl From<SysDays> for YearMonthWeekday {
  #[inline]
  fn from(from: SysDays) -> Self {
    Self::from_sys_days(from)
  }
}

_impl_delta_arithmetic!(YearMonthWeekday, Months, add_months);
_impl_delta_arithmetic!(YearMonthWeekday, Years, add_years);

/// The last weekday of a specific month of a specific year.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonthWeekdayLast {
  year: Year,
  month: Month,
  weekday_last: WeekdayLast,
}

impl YearMonthWeekdayLast {
  /// Unchecked instance.
  #[inline]
  pub const fn new(year: Year, month: Month, weekday_last: WeekdayLast) -> Self {
    Self { year, month, weekday_last }
  }

  /// Orders by year, then by month and then by weekday.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.year.compare(other.year) {
      Ordering::Equal => match self.month.compare(other.month) {
        Ordering::Equal => self.weekday_last.compare(other.weekday_last),
        ordering => ordering,
      },
      ordering => ordering,
    }
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// If all fields are valid.
  #[inline]
  pub const fn ok(self) -> bool {
    self.year.ok() && self.month.ok() && self.weekday_last.ok()
  }

  /// Day count since 1970-01-01 of the last occurrence of the weekday in the month.
  ///
  /// Walks backward from the last day of the month. Returns the epoch if the weekday can't be
  /// found, which only happens with invalid fields.
  #[inline]
  pub fn to_sys_days(self) -> SysDays {
    let last = YearMonthDayLast::new(self.year, MonthDayLast::new(self.month));
    let mut sys_days = last.to_sys_days();
    let mut remaining = last.day().num();
    while remaining >= 1 {
      if Weekday::from_sys_days(sys_days) == self.weekday() {
        return sys_days;
      }
      sys_days -= Days::new(1);
      remaining = remaining.wrapping_sub(1);
    }
    _debug!(
      year = self.year.num(),
      month = self.month.num(),
      weekday = self.weekday().c_encoding(),
      "Last weekday not found"
    );
    SysDays::default()
  }

  /// Weekday
  #[inline]
  pub const fn weekday(self) -> Weekday {
    self.weekday_last.weekday()
  }

  /// Last weekday
  #[inline]
  pub const fn weekday_last(self) -> WeekdayLast {
    self.weekday_last
  }

  /// Year
  #[inline]
  pub const fn year(self) -> Year {
    self.year
  }

  #[inline]
  pub(crate) const fn add_months(self, months: Months) -> Self {
    Self { month: self.month.add_months(months), ..self }
  }

  #[inline]
  pub(crate) const fn add_years(self, years: Years) -> Self {
    Self { year: self.year.add_years(years), ..self }
  }
}

impl ByteHash for YearMonthWeekdayLast {
  #[inline]
  fn byte_hash(&self) -> usize {
    hash_parts(self.year, self.month, self.weekday())
  }
}

impl From<YearMonthWeekdayLast> for SysDays {
  #[inline]
  fn from(from: YearMonthWeekdayLast) -> Self {
    from.to_sys_days()
  }
}

_impl_delta_arithmetic!(YearMonthWeekdayLast, Months, add_months);
_impl_delta_arithmetic!(YearMonthWeekdayLast, Years, add_years);

fn hash_parts(year: Year, month: Month, weekday: Weekday) -> usize {
  let [a, b] = year.num().to_ne_bytes();
  let [c, d, e, f] = u8u32(weekday.c_encoding()).to_ne_bytes();
  generic_hash(&[a, b, month.num(), c, d, e, f])
}
