
use crate::{
  calendar::{
    CalendarError, Day, Days, Month, MonthDayLast, Months, SysDays, Year, YearMonth, Years,
    days_in_month, days_in_year, is_leap_year,
    misc::{i16i32, i32u32, u8i32, u8u32},
  },
  hash::{ByteHash, generic_hash},
};
use core::{
  cmp::Ordering,
  fmt::{Display, Formatter},
};

/// A date of the proleptic Gregorian calendar.
///
/// Fields are stored as given, [`Self::ok`] tells if they form an existing date.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonthDay {
  year: Year,
  month: Month,
  day: Day,
}

impl YearMonthDay {
  /// Creates a new instance from an existing date.
  #[inline]
  pub const fn from_ymd(year: Year, month: Month, day: Day) -> Result<Self, CalendarError> {
    let this = Self { year, month, day };
    if !this.ok() {
      return Err(CalendarError::InvalidDate {
        year: year.num(),
        month: month.num(),
        day: day.num(),
      });
    }
    Ok(this)
  }

  /// Date of a day count since 1970-01-01.
  ///
  /// Walks year by year from 1970, forwards or backwards, and then month by month.
  ///
  /// Only counts from `-12_687_795` (`-32768-01-01`) to `11_248_737` (`32767-12-31`) have a
  /// [`Year`]. Counts outside of that range wrap the year around `i16` and the resulting date does
  /// not convert back to the same count.
  #[inline]
  pub const fn from_sys_days(sys_days: SysDays) -> Self {
    let mut remaining = sys_days.time_since_epoch().count();
    let mut year = i16i32(Year::EPOCH.num());
    loop {
      if remaining < 0 {
        year = year.wrapping_sub(1);
        remaining = remaining.wrapping_add(days_in_year(is_leap_year(year)));
      } else {
        let len = days_in_year(is_leap_year(year));
        if remaining < len {
          break;
        }
        remaining = remaining.wrapping_sub(len);
        year = year.wrapping_add(1);
      }
    }
    let is_leap = is_leap_year(year);
    let mut month: u8 = 1;
    loop {
      let len = u8i32(days_in_month(month, is_leap));
      if remaining < len || month >= 12 {
        break;
      }
      remaining = remaining.wrapping_sub(len);
      month = month.wrapping_add(1);
    }
    Self {
      year: Year::new(year),
      month: Month::new(u8u32(month)),
      day: Day::new(i32u32(remaining.wrapping_add(1))),
    }
  }

  /// Unchecked instance.
  #[inline]
  pub const fn new(year: Year, month: Month, day: Day) -> Self {
    Self { year, month, day }
  }

  /// Orders by year, then by month and then by day.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.year.compare(other.year) {
      Ordering::Equal => match self.month.compare(other.month) {
        Ordering::Equal => self.day.compare(other.day),
        ordering => ordering,
      },
      ordering => ordering,
    }
  }

  /// Day
  #[inline]
  pub const fn day(self) -> Day {
    self.day
  }

  /// Number of days of the month in the year. Zero for invalid months.
  #[inline]
  pub const fn max_day_for_month(self) -> Day {
    Day::new(u8u32(days_in_month(self.month.num(), self.year.is_leap())))
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month
  }

  /// If all fields are valid and the day exists in the month of the year.
  #[inline]
  pub const fn ok(self) -> bool {
    self.year.ok()
      && self.month.ok()
      && self.day.ok()
      && self.day.num() <= self.max_day_for_month().num()
  }

  /// Day count since 1970-01-01.
  ///
  /// Accumulates the length of every year between 1970 and the date, then the length of every
  /// month before the date. Invalid dates are still converted field by field.
  #[inline]
  pub fn to_sys_days(self) -> SysDays {
    if !self.ok() {
      _debug!(
        year = self.year.num(),
        month = self.month.num(),
        day = self.day.num(),
        "Converting an invalid date"
      );
    }
    let target = i16i32(self.year.num());
    let mut count: i32 = 0;
    let mut year = i16i32(Year::EPOCH.num());
    while year < target {
      count = count.wrapping_add(days_in_year(is_leap_year(year)));
      year = year.wrapping_add(1);
    }
    while year > target {
      year = year.wrapping_sub(1);
      count = count.wrapping_sub(days_in_year(is_leap_year(year)));
    }
    let is_leap = self.year.is_leap();
    let mut month: u8 = 1;
    while month < self.month.num() && month <= 12 {
      count = count.wrapping_add(u8i32(days_in_month(month, is_leap)));
      month = month.wrapping_add(1);
    }
    count = count.wrapping_add(u8i32(self.day.num())).wrapping_sub(1);
    SysDays::new(Days::new(count))
  }

  /// Year
  #[inline]
  pub const fn year(self) -> Year {
    self.year
  }

  /// Year and month
  #[inline]
  pub const fn year_month(self) -> YearMonth {
    YearMonth::new(self.year, self.month)
  }

  #[inline]
  pub(crate) const fn add_months(self, months: Months) -> Self {
    Self { year: self.year, month: self.month.add_months(months), day: self.day }
  }

  #[inline]
  pub(crate) const fn add_years(self, years: Years) -> Self {
    Self { year: self.year.add_years(years), month: self.month, day: self.day }
  }
}

impl ByteHash for YearMonthDay {
  #[inline]
  fn byte_hash(&self) -> usize {
    let [a, b, c, d] = i32u32(i16i32(self.year.num())).to_ne_bytes();
    let [e, f, g, h] = u8u32(self.month.num()).to_ne_bytes();
    let [i, j, k, l] = u8u32(self.day.num()).to_ne_bytes();
    generic_hash(&[a, b, c, d, e, f, g, h, i, j, k, l])
  }
}

impl Display for YearMonthDay {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    write!(f, "{:04}-{:02}-{:02}", self.year.num(), self.month.num(), self.day.num())
  }
}

impl From<SysDays> for YearMonthDay {
  #[inline]
  fn from(from: SysDays) -> Self {
    Self::from_sys_days(from)
  }
}

impl From<YearMonthDay> for SysDays {
  #[inline]
  fn from(from: YearMonthDay) -> Self {
    from.to_sys_days()
  }
}

impl From<YearMonthDayLast> for YearMonthDay {
  #[inline]
  fn from(from: YearMonthDayLast) -> Self {
    Self::new(from.year, from.month_day_last.month(), from.day())
  }
}

_impl_delta_arithmetic!(YearMonthDay, Months, add_months);
_impl_delta_arithmetic!(YearMonthDay, Years, add_years);

/// The last day of a specific month of a specific year.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonthDayLast {
  year: Year,
  month_day_last: MonthDayLast,
}

impl YearMonthDayLast {
  /// Unchecked instance.
  #[inline]
  pub const fn new(year: Year, month_day_last: MonthDayLast) -> Self {
    Self { year, month_day_last }
  }

  /// Orders by year and then by month.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.year.compare(other.year) {
      Ordering::Equal => self.month_day_last.compare(other.month_day_last),
      ordering => ordering,
    }
  }

  /// Last day of the month, computed on demand. Zero for invalid months.
  #[inline]
  pub const fn day(self) -> Day {
    Day::new(u8u32(days_in_month(self.month_day_last.month().num(), self.year.is_leap())))
  }

  /// Month
  #[inline]
  pub const fn month(self) -> Month {
    self.month_day_last.month()
  }

  /// Month marker
  #[inline]
  pub const fn month_day_last(self) -> MonthDayLast {
    self.month_day_last
  }

  /// If the year and the month are valid.
  #[inline]
  pub const fn ok(self) -> bool {
    self.year.ok() && self.month_day_last.ok()
  }

  /// Day count since 1970-01-01 of the last day of the month.
  #[inline]
  pub fn to_sys_days(self) -> SysDays {
    YearMonthDay::new(self.year, self.month_day_last.month(), self.day()).to_sys_days()
  }

  /// Year
  #[inline]
  pub const fn year(self) -> Year {
    self.year
  }

  #[inline]
  pub(crate) const fn add_months(self, months: Months) -> Self {
    let month = self.month_day_last.month().add_months(months);
    Self { year: self.year, month_day_last: MonthDayLast::new(month) }
  }

  #[inline]
  pub(crate) const fn add_years(self, years: Years) -> Self {
    Self { year: self.year.add_years(years), month_day_last: self.month_day_last }
  }
}

impl ByteHash for YearMonthDayLast {
  #[inline]
  fn byte_hash(&self) -> usize {
    let [a, b, c, d] = i32u32(i16i32(self.year.num())).to_ne_bytes();
    let [e, f, g, h] = u8u32(self.month().num()).to_ne_bytes();
    let [i, j, k, l] = u8u32(self.day().num()).to_ne_bytes();
    generic_hash(&[a, b, c, d, e, f, g, h, i, j, k, l])
  }
}

impl From<YearMonthDayLast> for SysDays {
  #[inline]
  fn from(from: YearMonthDayLast) -> Self {
    from.to_sys_days()
  }
}

_impl_delta_arithmetic!(YearMonthDayLast, Months, add_months);
_impl_delta_arithmetic!(YearMonthDayLast, Years, add_years);
