#[cfg(test)]
mod tests;

use crate::{
  calendar::{
    CalendarError, Months,
    misc::{i32u8, u8i32, u8u32, u32u8},
  },
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// Month of the year, from `1` (January) to `12` (December).
///
/// Any value can be stored, [`Self::ok`] tells if it is within `1..=12`.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Month(u8);

impl Month {
  /// January
  pub const JANUARY: Self = Self(1);
  /// February
  pub const FEBRUARY: Self = Self(2);
  /// March
  pub const MARCH: Self = Self(3);
  /// April
  pub const APRIL: Self = Self(4);
  /// May
  pub const MAY: Self = Self(5);
  /// June
  pub const JUNE: Self = Self(6);
  /// July
  pub const JULY: Self = Self(7);
  /// August
  pub const AUGUST: Self = Self(8);
  /// September
  pub const SEPTEMBER: Self = Self(9);
  /// October
  pub const OCTOBER: Self = Self(10);
  /// November
  pub const NOVEMBER: Self = Self(11);
  /// December
  pub const DECEMBER: Self = Self(12);
  /// December
  pub const MAX: Self = Self::DECEMBER;
  /// January
  pub const MIN: Self = Self::JANUARY;

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    let this = Self(num);
    if !this.ok() {
      return Err(CalendarError::InvalidMonth { received: num });
    }
    Ok(this)
  }

  /// Unchecked instance. Only the lowest 8 bits of `num` are kept.
  #[inline]
  pub const fn new(num: u32) -> Self {
    Self(u32u8(num))
  }

  /// Orders two months.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    if self.0 < other.0 {
      Ordering::Less
    } else if self.0 > other.0 {
      Ordering::Greater
    } else {
      Ordering::Equal
    }
  }

  /// Full name like `January` or `December`. Empty for invalid months.
  #[inline]
  pub const fn name(self) -> &'static str {
    match self.0 {
      1 => "January",
      2 => "February",
      3 => "March",
      4 => "April",
      5 => "May",
      6 => "June",
      7 => "July",
      8 => "August",
      9 => "September",
      10 => "October",
      11 => "November",
      12 => "December",
      _ => "",
    }
  }

  /// Integer representation
  #[inline]
  pub const fn num(self) -> u8 {
    self.0
  }

  /// If the month is within `1..=12`.
  #[inline]
  pub const fn ok(self) -> bool {
    self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
  }

  /// Previous month, December comes before January.
  #[inline]
  #[must_use]
  pub const fn pred(self) -> Self {
    self.add_months(Months::new(-1))
  }

  /// Short name like `Jan` or `Dec`. Empty for invalid months.
  #[inline]
  pub const fn short_name(self) -> &'static str {
    match self.0 {
      1 => "Jan",
      2 => "Feb",
      3 => "Mar",
      4 => "Apr",
      5 => "May",
      6 => "Jun",
      7 => "Jul",
      8 => "Aug",
      9 => "Sep",
      10 => "Oct",
      11 => "Nov",
      12 => "Dec",
      _ => "",
    }
  }

  /// Next month, January comes after December.
  #[inline]
  #[must_use]
  pub const fn succ(self) -> Self {
    self.add_months(Months::new(1))
  }

  // Cyclic arithmetic, invalid values are first brought into `1..=12`.
  #[inline]
  pub(crate) const fn add_months(self, months: Months) -> Self {
    let mut value = self.0 % 12;
    if value == 0 {
      value = 12;
    }
    let sum = u8i32(value).wrapping_add(11).wrapping_add(months.count() % 12);
    Self(i32u8(sum % 12).wrapping_add(1))
  }
}

impl ByteHash for Month {
  #[inline]
  fn byte_hash(&self) -> usize {
    generic_hash(&u8u32(self.0).to_ne_bytes())
  }
}

impl From<Month> for u32 {
  #[inline]
  fn from(from: Month) -> Self {
    u8u32(from.0)
  }
}

impl core::ops::Sub for Month {
  type Output = Months;

  /// Forward distance from `rhs` to `self`, always within `0..=11`. Zero if any of the months is
  /// invalid.
  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    if !self.ok() || !rhs.ok() {
      return Months::new(0);
    }
    Months::new(u8i32(self.0).wrapping_sub(u8i32(rhs.0)).rem_euclid(12))
  }
}

impl TryFrom<u8> for Month {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

impl TryFrom<u32> for Month {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u32) -> Result<Self, Self::Error> {
    Ok(Self::from_num(u8::try_from(from)?)?)
  }
}

_impl_delta_arithmetic!(Month, Months, add_months);
