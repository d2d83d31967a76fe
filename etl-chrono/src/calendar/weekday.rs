#[cfg(test)]
mod tests;

use crate::{
  calendar::{
    CalendarError, Days, SysDays,
    misc::{i32u8, u8i32, u8u32, u32u8},
  },
  hash::{ByteHash, generic_hash},
};
use core::cmp::Ordering;

/// Marker of the last day, or the last weekday, of a month. See the `/` operators of
/// [`crate::calendar`] types.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Last;

/// The day of week, C encoded from `0` (Sunday) to `6` (Saturday).
///
/// The default value is not valid.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Weekday(u8);

impl Weekday {
  /// Sunday
  pub const SUNDAY: Self = Self(0);
  /// Monday
  pub const MONDAY: Self = Self(1);
  /// Tuesday
  pub const TUESDAY: Self = Self(2);
  /// Wednesday
  pub const WEDNESDAY: Self = Self(3);
  /// Thursday
  pub const THURSDAY: Self = Self(4);
  /// Friday
  pub const FRIDAY: Self = Self(5);
  /// Saturday
  pub const SATURDAY: Self = Self(6);
  /// Saturday
  pub const MAX: Self = Self::SATURDAY;
  /// Sunday
  pub const MIN: Self = Self::SUNDAY;

  /// Creates a new instance from a valid `num` number. Both `0` and `7` are Sunday.
  #[inline]
  pub const fn from_num(num: u8) -> Result<Self, CalendarError> {
    let this = Self::new(u8u32(num));
    if !this.ok() {
      return Err(CalendarError::InvalidWeekday { received: num });
    }
    Ok(this)
  }

  /// Weekday of a day count since 1970-01-01, which was a Thursday.
  #[inline]
  pub const fn from_sys_days(sys_days: SysDays) -> Self {
    let rem = sys_days.time_since_epoch().count().rem_euclid(7);
    Self(i32u8((rem + 4) % 7))
  }

  /// Unchecked instance. `7` is stored as Sunday, other values keep their lowest 8 bits.
  #[inline]
  pub const fn new(num: u32) -> Self {
    if num == 7 { Self(0) } else { Self(u32u8(num)) }
  }

  /// `0` (Sunday) to `6` (Saturday).
  #[inline]
  pub const fn c_encoding(self) -> u8 {
    self.0
  }

  /// Orders two weekdays by their C encoding.
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

  /// The `index`-th occurrence of this weekday in a month.
  #[inline]
  pub const fn index(self, index: u32) -> WeekdayIndexed {
    WeekdayIndexed::new(self, index)
  }

  /// If the weekday is Saturday or Sunday.
  #[inline]
  pub const fn is_weekend(self) -> bool {
    self.0 == Self::SATURDAY.0 || self.0 == Self::SUNDAY.0
  }

  /// `1` (Monday) to `7` (Sunday).
  #[inline]
  pub const fn iso_encoding(self) -> u8 {
    if self.0 == 0 { 7 } else { self.0 }
  }

  /// The last occurrence of this weekday in a month.
  #[inline]
  pub const fn last(self) -> WeekdayLast {
    WeekdayLast::new(self)
  }

  /// Full name like `Monday` or `Sunday`. Empty for invalid weekdays.
  #[inline]
  pub const fn name(self) -> &'static str {
    match self.0 {
      0 => "Sunday",
      1 => "Monday",
      2 => "Tuesday",
      3 => "Wednesday",
      4 => "Thursday",
      5 => "Friday",
      6 => "Saturday",
      _ => "",
    }
  }

  /// If the weekday is within `0..=6`.
  #[inline]
  pub const fn ok(self) -> bool {
    self.0 <= Self::MAX.0
  }

  /// Previous weekday, Saturday comes before Sunday.
  #[inline]
  #[must_use]
  pub const fn pred(self) -> Self {
    self.add_days(Days::new(-1))
  }

  /// Short name like `Mon` or `Sun`. Empty for invalid weekdays.
  #[inline]
  pub const fn short_name(self) -> &'static str {
    match self.0 {
      0 => "Sun",
      1 => "Mon",
      2 => "Tue",
      3 => "Wed",
      4 => "Thu",
      5 => "Fri",
      6 => "Sat",
      _ => "",
    }
  }

  /// Next weekday, Sunday comes after Saturday.
  #[inline]
  #[must_use]
  pub const fn succ(self) -> Self {
    self.add_days(Days::new(1))
  }

  // Cyclic arithmetic, invalid values are first brought into `0..=6`.
  #[inline]
  pub(crate) const fn add_days(self, days: Days) -> Self {
    let sum = u8i32(self.0 % 7).wrapping_add(7).wrapping_add(days.count() % 7);
    Self(i32u8(sum % 7))
  }
}

impl ByteHash for Weekday {
  #[inline]
  fn byte_hash(&self) -> usize {
    generic_hash(&u8u32(self.0).to_ne_bytes())
  }
}

impl Default for Weekday {
  #[inline]
  fn default() -> Self {
    Self(u8::MAX)
  }
}

impl From<SysDays> for Weekday {
  #[inline]
  fn from(from: SysDays) -> Self {
    Self::from_sys_days(from)
  }
}

impl core::ops::Sub for Weekday {
  type Output = Days;

  /// Forward distance from `rhs` to `self`, always within `0..=6`. Zero if any of the weekdays is
  /// invalid.
  #[inline]
  fn sub(self, rhs: Self) -> Self::Output {
    if !self.ok() || !rhs.ok() {
      return Days::new(0);
    }
    Days::new(u8i32(self.0).wrapping_sub(u8i32(rhs.0)).rem_euclid(7))
  }
}

impl TryFrom<u8> for Weekday {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: u8) -> Result<Self, Self::Error> {
    Ok(Self::from_num(from)?)
  }
}

_impl_delta_arithmetic!(Weekday, Days, add_days);

/// The n-th occurrence, from `1` to `5`, of a weekday in a month.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WeekdayIndexed {
  weekday: Weekday,
  index: u8,
}

impl WeekdayIndexed {
  /// Creates a new instance from a valid weekday and index.
  #[inline]
  pub const fn from_parts(weekday: Weekday, index: u8) -> Result<Self, CalendarError> {
    if !weekday.ok() {
      return Err(CalendarError::InvalidWeekday { received: weekday.0 });
    }
    let this = Self { weekday, index };
    if !this.ok() {
      return Err(CalendarError::InvalidWeekdayIndex { received: index });
    }
    Ok(this)
  }

  /// Unchecked instance. Only the lowest 8 bits of `index` are kept.
  #[inline]
  pub const fn new(weekday: Weekday, index: u32) -> Self {
    Self { weekday, index: u32u8(index) }
  }

  /// Orders by weekday and then by index.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    match self.weekday.compare(other.weekday) {
      Ordering::Equal => {
        if self.index < other.index {
          Ordering::Less
        } else if self.index > other.index {
          Ordering::Greater
        } else {
          Ordering::Equal
        }
      }
      ordering => ordering,
    }
  }

  /// Occurrence within the month.
  #[inline]
  pub const fn index(self) -> u8 {
    self.index
  }

  /// If the weekday is valid and the index is within `1..=5`.
  #[inline]
  pub const fn ok(self) -> bool {
    self.weekday.ok() && self.index >= 1 && self.index <= 5
  }

  /// Weekday
  #[inline]
  pub const fn weekday(self) -> Weekday {
    self.weekday
  }
}

impl ByteHash for WeekdayIndexed {
  #[inline]
  fn byte_hash(&self) -> usize {
    let [a, b, c, d] = u8u32(self.weekday.0).to_ne_bytes();
    let [e, f, g, h] = u8u32(self.index).to_ne_bytes();
    generic_hash(&[a, b, c, d, e, f, g, h])
  }
}

/// The last occurrence of a weekday in a month.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WeekdayLast {
  weekday: Weekday,
}

impl WeekdayLast {
  /// Instance of `weekday`.
  #[inline]
  pub const fn new(weekday: Weekday) -> Self {
    Self { weekday }
  }

  /// Orders by weekday.
  #[inline]
  pub const fn compare(self, other: Self) -> Ordering {
    self.weekday.compare(other.weekday)
  }

  /// If the weekday is valid.
  #[inline]
  pub const fn ok(self) -> bool {
    self.weekday.ok()
  }

  /// Weekday
  #[inline]
  pub const fn weekday(self) -> Weekday {
    self.weekday
  }
}

impl ByteHash for WeekdayLast {
  #[inline]
  fn byte_hash(&self) -> usize {
    self.weekday.byte_hash()
  }
}
