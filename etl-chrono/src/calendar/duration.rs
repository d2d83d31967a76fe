#[cfg(test)]
mod tests;

use crate::{
  calendar::{CalendarError, DurationRep, duration_rep::CommonRep, misc::i64f64},
  hash::ByteHash,
  ratio::{
    CommonPeriod, DayPeriod, Hour, Micro, Milli, Minute, MonthPeriod, Nano, Period, Unit,
    WeekPeriod, YearPeriod, gcd, lcm, ratio_divide,
  },
};
use core::{
  cmp::Ordering,
  hash::{Hash, Hasher},
  marker::PhantomData,
  ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
  },
};
use num_traits::{NumCast, One};

/// Nanoseconds
pub type Nanoseconds = Duration<i64, Nano>;
/// Microseconds
pub type Microseconds = Duration<i64, Micro>;
/// Milliseconds
pub type Milliseconds = Duration<i64, Milli>;
/// Seconds
pub type Seconds = Duration<i64, Unit>;
/// Minutes
pub type Minutes = Duration<i32, Minute>;
/// Hours
pub type Hours = Duration<i32, Hour>;
/// Days
pub type Days = Duration<i32, DayPeriod>;
/// Weeks
pub type Weeks = Duration<i32, WeekPeriod>;
/// Average Gregorian months
pub type Months = Duration<i32, MonthPeriod>;
/// Average Gregorian years
pub type Years = Duration<i32, YearPeriod>;

/// Converts `from` into `To`, truncating towards zero when the target can't hold the exact value.
///
/// The reduced ratio between both periods decides the arithmetic: no scaling when it is `1/1`, a
/// single division or multiplication when one side is `1`, otherwise a multiplication followed by
/// a division. Intermediate values are `i128`, or `f64` if any of the representations is
/// floating-point.
#[inline]
pub fn duration_cast<To>(from: impl IsDuration) -> To
where
  To: IsDuration,
{
  from.into_duration().cast()
}

/// Implemented by [`Duration`] so that target durations can be named by their type aliases.
pub trait IsDuration: Copy {
  /// Tick period
  type Period: Period;
  /// Tick representation
  type Rep: DurationRep;

  /// Instance with the given number of ticks.
  fn from_count(count: Self::Rep) -> Self;

  /// Concrete duration.
  fn into_duration(self) -> Duration<Self::Rep, Self::Period>;
}

/// Tick count of a compile-time [`Period`], in seconds.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct Duration<R, P> {
  count: R,
  #[cfg_attr(feature = "serde", serde(skip))]
  period: PhantomData<P>,
}

impl<R, P> Duration<R, P>
where
  R: DurationRep,
  P: Period,
{
  /// Instance with `count` ticks.
  #[inline]
  pub const fn new(count: R) -> Self {
    Self { count, period: PhantomData }
  }

  /// Number of ticks.
  #[inline]
  pub const fn count(&self) -> R {
    self.count
  }

  /// Highest representable duration.
  #[inline]
  pub const fn max() -> Self {
    Self::new(R::MAX)
  }

  /// Lowest representable duration.
  #[inline]
  pub const fn min() -> Self {
    Self::new(R::LOWEST)
  }

  /// Zero ticks
  #[inline]
  pub const fn zero() -> Self {
    Self::new(R::ZERO)
  }

  /// Absolute value.
  #[inline]
  #[must_use]
  pub fn abs(self) -> Self {
    if self.count < R::ZERO { Self::new(self.count.wrapping_neg()) } else { self }
  }

  /// See [`duration_cast`].
  #[inline]
  pub fn cast<To>(self) -> To
  where
    To: IsDuration,
  {
    let (num, den) = const { ratio_divide::<P, To::Period>() };
    let count = if R::IS_FLOAT || To::Rep::IS_FLOAT {
      let value = self.count.to_f64_lossy();
      To::Rep::from_f64_lossy(match (num == 1, den == 1) {
        (true, true) => value,
        (true, false) => value / i64f64(den),
        (false, true) => value * i64f64(num),
        (false, false) => value * i64f64(num) / i64f64(den),
      })
    } else {
      let value = self.count.to_i128();
      let (num, den) = (<i128 as From<i64>>::from(num), <i128 as From<i64>>::from(den));
      To::Rep::from_i128_lossy(match (num == 1, den == 1) {
        (true, true) => value,
        (true, false) => value.wrapping_div(den),
        (false, true) => value.wrapping_mul(num),
        (false, false) => value.wrapping_mul(num).wrapping_div(den),
      })
    };
    To::from_count(count)
  }

  /// Smallest `To` that is greater than or equal to `self`.
  #[inline]
  pub fn ceil<To>(self) -> To
  where
    To: IsDuration,
  {
    let to = self.cast::<To>().into_duration();
    if to < self {
      To::from_count(to.count.wrapping_add(One::one()))
    } else {
      To::from_count(to.count)
    }
  }

  /// Like [`Self::cast`] but returns an error if the intermediate computation or the target
  /// representation can't hold the value.
  #[inline]
  pub fn checked_cast<To>(self) -> Result<To, CalendarError>
  where
    To: IsDuration,
  {
    let (num, den) = const { ratio_divide::<P, To::Period>() };
    let count = if R::IS_FLOAT || To::Rep::IS_FLOAT {
      <To::Rep as NumCast>::from(self.count.to_f64_lossy() * i64f64(num) / i64f64(den))
    } else {
      self
        .count
        .to_i128()
        .checked_mul(num.into())
        .map(|value| value.wrapping_div(den.into()))
        .and_then(<To::Rep as NumCast>::from)
    };
    count.map(To::from_count).ok_or_else(|| {
      _trace!(count = ?self.count, "Duration cast overflowed");
      CalendarError::ArithmeticOverflow
    })
  }

  /// Greatest `To` that is less than or equal to `self`.
  #[inline]
  pub fn floor<To>(self) -> To
  where
    To: IsDuration,
  {
    let to = self.cast::<To>().into_duration();
    if to > self {
      To::from_count(to.count.wrapping_sub(One::one()))
    } else {
      To::from_count(to.count)
    }
  }

  /// Lossless conversion from another duration.
  ///
  /// Fails to compile when `other` can't be exactly represented: integer targets only accept
  /// integer sources whose period is a multiple of `P`.
  #[inline]
  pub fn from_duration<R2, P2>(other: Duration<R2, P2>) -> Self
  where
    R2: DurationRep,
    P2: Period,
  {
    const {
      assert!(
        R::IS_FLOAT || (!R2::IS_FLOAT && ratio_divide::<P2, P>().1 == 1),
        "lossy duration conversion, use `duration_cast` instead"
      );
    }
    other.cast()
  }

  /// Previous tick
  #[inline]
  #[must_use]
  pub fn pred(self) -> Self {
    Self::new(self.count.wrapping_sub(R::one()))
  }

  /// Nearest `To`, ties go to the even count.
  #[inline]
  pub fn round<To>(self) -> To
  where
    To: IsDuration,
  {
    let lower = self.floor::<To>().into_duration();
    let upper = Duration::<To::Rep, To::Period>::new(lower.count.wrapping_add(One::one()));
    let ordering = match (scaled_counts(self, lower), scaled_counts(upper, self)) {
      (ScaledCounts::Integer(a, b), ScaledCounts::Integer(c, d)) => {
        a.wrapping_sub(b).cmp(&c.wrapping_sub(d))
      }
      (ScaledCounts::Float(a, b), ScaledCounts::Float(c, d)) => {
        (a - b).partial_cmp(&(c - d)).unwrap_or(Ordering::Equal)
      }
      _ => Ordering::Equal,
    };
    let rslt = match ordering {
      Ordering::Less => lower,
      Ordering::Greater => upper,
      Ordering::Equal => {
        let two = <To::Rep as One>::one() + One::one();
        if lower.count.wrapping_rem(two) == To::Rep::ZERO { lower } else { upper }
      }
    };
    To::from_count(rslt.count)
  }

  /// Next tick
  #[inline]
  #[must_use]
  pub fn succ(self) -> Self {
    Self::new(self.count.wrapping_add(R::one()))
  }
}

impl<R, P> ByteHash for Duration<R, P>
where
  R: DurationRep,
  P: Period,
{
  #[inline]
  fn byte_hash(&self) -> usize {
    DurationRep::byte_hash(self.count)
  }
}

impl<R, P> Hash for Duration<R, P>
where
  R: DurationRep + Hash,
  P: Period,
{
  #[inline]
  fn hash<H>(&self, state: &mut H)
  where
    H: Hasher,
  {
    self.count.hash(state);
  }
}

impl<R, P> IsDuration for Duration<R, P>
where
  R: DurationRep,
  P: Period,
{
  type Period = P;
  type Rep = R;

  #[inline]
  fn from_count(count: Self::Rep) -> Self {
    Self::new(count)
  }

  #[inline]
  fn into_duration(self) -> Duration<Self::Rep, Self::Period> {
    self
  }
}

impl<R, P> Eq for Duration<R, P>
where
  R: DurationRep + Eq,
  P: Period,
{
}

impl<R, P> Ord for Duration<R, P>
where
  R: DurationRep + Ord,
  P: Period,
{
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.count.cmp(&other.count)
  }
}

impl<R1, P1, R2, P2> PartialEq<Duration<R2, P2>> for Duration<R1, P1>
where
  R1: DurationRep,
  P1: Period,
  R2: DurationRep,
  P2: Period,
{
  #[inline]
  fn eq(&self, other: &Duration<R2, P2>) -> bool {
    self.partial_cmp(other) == Some(Ordering::Equal)
  }
}

impl<R1, P1, R2, P2> PartialOrd<Duration<R2, P2>> for Duration<R1, P1>
where
  R1: DurationRep,
  P1: Period,
  R2: DurationRep,
  P2: Period,
{
  #[inline]
  fn partial_cmp(&self, other: &Duration<R2, P2>) -> Option<Ordering> {
    match scaled_counts(*self, *other) {
      ScaledCounts::Float(lhs, rhs) => lhs.partial_cmp(&rhs),
      ScaledCounts::Integer(lhs, rhs) => Some(lhs.cmp(&rhs)),
    }
  }
}

impl<R1, P1, R2, P2> Add<Duration<R2, P2>> for Duration<R1, P1>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output = Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>;

  #[inline]
  fn add(self, rhs: Duration<R2, P2>) -> Self::Output {
    let lhs: Self::Output = self.cast();
    let rhs: Self::Output = rhs.cast();
    Duration::new(lhs.count.wrapping_add(rhs.count))
  }
}

impl<R, P> AddAssign for Duration<R, P>
where
  R: DurationRep,
  P: Period,
{
  #[inline]
  fn add_assign(&mut self, rhs: Self) {
    self.count = self.count.wrapping_add(rhs.count);
  }
}

impl<R1, P1, R2, P2> Div<Duration<R2, P2>> for Duration<R1, P1>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output = <R1 as CommonRep<R2>>::Output;

  #[inline]
  fn div(self, rhs: Duration<R2, P2>) -> Self::Output {
    let lhs: Duration<Self::Output, <P1 as CommonPeriod<P2>>::Output> = self.cast();
    let rhs: Duration<Self::Output, <P1 as CommonPeriod<P2>>::Output> = rhs.cast();
    lhs.count.wrapping_div(rhs.count)
  }
}

impl<R, P> Neg for Duration<R, P>
where
  R: DurationRep,
  P: Period,
{
  type Output = Self;

  #[inline]
  fn neg(self) -> Self::Output {
    Self::new(self.count.wrapping_neg())
  }
}

impl<R1, P1, R2, P2> Rem<Duration<R2, P2>> for Duration<R1, P1>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output = Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>;

  #[inline]
  fn rem(self, rhs: Duration<R2, P2>) -> Self::Output {
    let lhs: Self::Output = self.cast();
    let rhs: Self::Output = rhs.cast();
    Duration::new(lhs.count.wrapping_rem(rhs.count))
  }
}

impl<R, P> RemAssign for Duration<R, P>
where
  R: DurationRep,
  P: Period,
{
  #[inline]
  fn rem_assign(&mut self, rhs: Self) {
    self.count = self.count.wrapping_rem(rhs.count);
  }
}

impl<R1, P1, R2, P2> Sub<Duration<R2, P2>> for Duration<R1, P1>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output = Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>;

  #[inline]
  fn sub(self, rhs: Duration<R2, P2>) -> Self::Output {
    let lhs: Self::Output = self.cast();
    let rhs: Self::Output = rhs.cast();
    Duration::new(lhs.count.wrapping_sub(rhs.count))
  }
}

impl<R, P> SubAssign for Duration<R, P>
where
  R: DurationRep,
  P: Period,
{
  #[inline]
  fn sub_assign(&mut self, rhs: Self) {
    self.count = self.count.wrapping_sub(rhs.count);
  }
}

macro_rules! impl_scalar_ops {
  ($($ty:ty),*) => {
    $(
      impl<P> Div<$ty> for Duration<$ty, P>
      where
        P: Period,
      {
        type Output = Self;

        #[inline]
        fn div(self, rhs: $ty) -> Self::Output {
          Self::new(DurationRep::wrapping_div(self.count, rhs))
        }
      }

      impl<P> DivAssign<$ty> for Duration<$ty, P>
      where
        P: Period,
      {
        #[inline]
        fn div_assign(&mut self, rhs: $ty) {
          self.count = DurationRep::wrapping_div(self.count, rhs);
        }
      }

      impl<P> Mul<$ty> for Duration<$ty, P>
      where
        P: Period,
      {
        type Output = Self;

        #[inline]
        fn mul(self, rhs: $ty) -> Self::Output {
          Self::new(DurationRep::wrapping_mul(self.count, rhs))
        }
      }

      impl<P> Mul<Duration<$ty, P>> for $ty
      where
        P: Period,
      {
        type Output = Duration<$ty, P>;

        #[inline]
        fn mul(self, rhs: Duration<$ty, P>) -> Self::Output {
          rhs * self
        }
      }

      impl<P> MulAssign<$ty> for Duration<$ty, P>
      where
        P: Period,
      {
        #[inline]
        fn mul_assign(&mut self, rhs: $ty) {
          self.count = DurationRep::wrapping_mul(self.count, rhs);
        }
      }

      impl<P> Rem<$ty> for Duration<$ty, P>
      where
        P: Period,
      {
        type Output = Self;

        #[inline]
        fn rem(self, rhs: $ty) -> Self::Output {
          Self::new(DurationRep::wrapping_rem(self.count, rhs))
        }
      }

      impl<P> RemAssign<$ty> for Duration<$ty, P>
      where
        P: Period,
      {
        #[inline]
        fn rem_assign(&mut self, rhs: $ty) {
          self.count = DurationRep::wrapping_rem(self.count, rhs);
        }
      }
    )*
  };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

enum ScaledCounts {
  Float(f64, f64),
  Integer(i128, i128),
}

// Factors that bring both periods to their common period.
const fn common_factors<P1, P2>() -> (i64, i64)
where
  P1: Period,
  P2: Period,
{
  let num = gcd(P1::NUM, P2::NUM);
  let den = lcm(P1::DEN, P2::DEN);
  ((P1::NUM / num).wrapping_mul(den / P1::DEN), (P2::NUM / num).wrapping_mul(den / P2::DEN))
}

fn scaled_counts<R1, P1, R2, P2>(lhs: Duration<R1, P1>, rhs: Duration<R2, P2>) -> ScaledCounts
where
  R1: DurationRep,
  P1: Period,
  R2: DurationRep,
  P2: Period,
{
  let (lhs_factor, rhs_factor) = const { common_factors::<P1, P2>() };
  if R1::IS_FLOAT || R2::IS_FLOAT {
    ScaledCounts::Float(
      lhs.count.to_f64_lossy() * i64f64(lhs_factor),
      rhs.count.to_f64_lossy() * i64f64(rhs_factor),
    )
  } else {
    ScaledCounts::Integer(
      lhs.count.to_i128().wrapping_mul(<i128 as From<i64>>::from(lhs_factor)),
      rhs.count.to_i128().wrapping_mul(<i128 as From<i64>>::from(rhs_factor)),
    )
  }
}
