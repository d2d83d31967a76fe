#[cfg(test)]
mod tests;

use crate::{
  calendar::{CalendarError, Month, Months, Year, Years, misc::u8i32},
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// A specific month of a specific year.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonth {
  year: Year,
  month: Month,
}

impl YearMonth {
  /// Creates a new instance from a valid year and month.
  #[inline]
  pub const fn from_parts(year: Year, month: Month) -> Result<Self, CalendarError> {
    if !year.ok() {
      return Err(CalendarError::InvalidYear { received: year.num() });
    }
    if !month.ok() {
      return Err(CalendarError::InvalidMonth { received: month.num() });
    }
    Ok(Self { year, month })
  }

  /// Unchecked instance.
  #[inline]
  pub const fn new(year: Year, month: Month) -> Self {
    Self { year, month }
  }

  /// Orders by year and then by month.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.year.compare(other.year) {
      Ordering::Equal => self.month.compare(other.month),
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
    self.year.ok() && self.month.ok()
  }

  /// Year
  #[inline]
  pub const fn year(self) -> Year {
    self.year
  }

  // The year is left untouched, months wrap around like `Month` does.
  #[inline]
  pub(crate) const fn add_months(self, months: Months) -> Self {
    Self { year: self.year, month: self.month.add_months(months) }
  }

  #[inline]
  pub(crate) const fn add_years(self, years: Years) -> Self {
    Self { year: self.year.add_years(years), month: self.month }
  }
}

impl ByteHash for YearMonth {
  #[inline]
  fn byte_hash(&self) -> usize {
    let [a, b] = self.year.num().to_ne_bytes();
    generic_hash(&[a, b, self.month.num()])
  }
}

impl core::ops::Sub for YearMonth {
  type Output = Months;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    let years = (self.year - rhs.year).count();
    let months = u8i32(self.month.num()).wrapping_sub(u8i32(rhs.month.num()));
    Months::new(years.wrapping_mul(12).wrapping_add(months))
  }
}

_impl_delta_arithmetic!(YearMonth, Months, add_months);
_impl_delta_arithmetic!(YearMonth, Years, add_years);
