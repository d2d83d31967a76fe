
use crate::{
  calendar::{
    CalendarError, Years, is_leap_year,
    misc::{i16i32, i32i16},
  },
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// Year of the proleptic Gregorian calendar.
///
/// Any value can be stored, [`Self::ok`] tells if it is not the reserved `i16::MIN`.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Year(i16);

impl Year {
  /// 1970
  pub const EPOCH: Self = Self(1970);
  /// Highest valid year
  pub const MAX: Self = Self(i16::MAX);
  /// Lowest valid year
  pub const MIN: Self = Self(-i16::MAX);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: i16) -> Result<Self, CalendarError> {
    let this = Self(num);
    if !this.ok() {
      return Err(CalendarError::InvalidYear { received: num });
    }
    Ok(this)
  }

  /// Unchecked instance. Only the lowest 16 bits of `num` are kept.
  #[inline]
  pub const fn new(num: i32) -> Self {
    Self(i32i16(num))
  }

  /// Orders two years.
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

  /// Years divisible by 4 but not by 100, or divisible by 400.
  #[inline]
  pub const fn is_leap(self) -> bool {
    is_leap_year(i16i32(self.0))
  }

  /// Integer representation
  #[inline]
  pub const fn num(self) -> i16 {
    self.0
  }

  /// If the year is not `i16::MIN`.
  #[inline]
  pub const fn ok(self) -> bool {
    self.0 != i16::MIN
  }

  /// Previous year, wraps around the storage.
  #[inline]
  #[must_use]
  pub const fn pred(self) -> Self {
    Self(self.0.wrapping_sub(1))
  }

  /// Next year, wraps around the storage.
  #[inline]
  #[must_use]
  pub const fn succ(self) -> Self {
    Self(self.0.wrapping_add(1))
  }

  #[inline]
  pub(crate) const fn add_years(self, years: Years) -> Self {
    Self(self.0.wrapping_add(i32i16(years.count())))
  }
}

impl ByteHash for Year {
  #[inline]
  fn byte_hash(&self) -> usize {
    generic_hash(&i16i32(self.0).to_ne_bytes())
  }
}

impl From<Year> for i32 {
  #[inline]
  fn from(from: Year) -> Self {
    i16i32(from.0)
  }
}

impl core::ops::Neg for Year {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self::Output {
    Self(self.0.wrapping_neg())
  }
}

impl core::ops::Sub for Year {
  type Output = Years;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    Years::new(i16i32(self.0).wrapping_sub(i16i32(rhs.0)))
  }
}

impl TryFrom<i16> for Year {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: i16) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

impl TryFrom<i32> for Year {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: i32) -> Result<Self, Self::Error> {
    Ok(Self::from_num(i16::try_from(from)?)?)
  }
}

_impl_delta_arithmetic!(Year, Years, add_years);
