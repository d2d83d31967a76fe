
use crate::{
  calendar::{
    CalendarError, Days,
    misc::{i32u8, u8i32, u8u32, u32u8},
  },
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// Day of the month.
///
/// Any value can be stored, [`Self::ok`] tells if it is within `1..=31`.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day(u8);

impl Day {
  /// Last day of the longest month
  pub const MAX: Self = Self(31);
  /// First day of any month
  pub const MIN: Self = Self(1);

  /// Creates a new instance from a valid `num` number.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    let this = Self(num);
    if !this.ok() {
      return Err(CalendarError::InvalidDay { received: num });
    }
    Ok(this)
  }

  /// Unchecked instance. Only the lowest 8 bits of `num` are kept.
  #[inline]
  pub const fn new(num: u32) -> Self {
    Self(u32u8(num))
  }

  /// Orders two days.
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

  /// Integer representation
  #[inline]
  pub const fn num(self) -> u8 {
    self.0
  }

  /// If the day is within `1..=31`.
  #[inline]
  pub const fn ok(self) -> bool {
    self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
  }

  /// Previous day, wraps around the storage.
  #[inline]
  #[must_use]
  pub const fn pred(self) -> Self {
    Self(self.0.wrapping_sub(1))
  }

  /// Next day, wraps around the storage.
  #[inline]
  #[must_use]
  pub const fn succ(self) -> Self {
    Self(self.0.wrapping_add(1))
  }

  #[inline]
  pub(crate) const fn add_days(self, days: Days) -> Self {
    Self(self.0.wrapping_add(i32u8(days.count())))
  }
}

impl ByteHash for Day {
  #[inline]
  fn byte_hash(&self) -> usize {
    generic_hash(&u8u32(self.0).to_ne_bytes())
  }
}

impl From<Day> for u32 {
  #[inline]
  fn from(from: Day) -> Self {
    u8u32(from.0)
  }
}

impl core::ops::Sub for Day {
  type Output = Days;

  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    Days::new(u8i32(self.0).wrapping_sub(u8i32(rhs.0)))
  }
}

impl TryFrom<u8> for Day {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

impl TryFrom<u32> for Day {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u32) -> Result<Self, Self::Error> {
    Ok(Self::from_num(u8::try_from(from)?)?)
  }
}

_impl_delta_arithmetic!(Day, Days, add_days);
