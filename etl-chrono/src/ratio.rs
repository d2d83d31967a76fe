//! Compile-time rational numbers used to scale durations.


use core::{fmt::Debug, hash::Hash};

/// A rational number known at compile time.
///
/// Implementations must expose reduced values with a positive denominator.
pub trait Period: Copy + Debug + Default + Eq + Hash + Ord + 'static {
  /// Numerator
  const NUM: i64;
  /// Denominator
  const DEN: i64;
}

/// The period that exactly represents the values of both `Self` and `P`: the greatest common
/// divisor of the numerators over the least common multiple of the denominators.
pub trait CommonPeriod<P>: Period
where
  P: Period,
{
  /// Common period
  type Output: Period;
}

/// `NUM / DEN`. Both values are reduced by their greatest common divisor and the sign is carried
/// by the numerator. A zero denominator is rejected when the period is used.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ratio<const NUM: i64, const DEN: i64 = 1>;

impl<const NUM: i64, const DEN: i64> Period for Ratio<NUM, DEN> {
  const NUM: i64 = reduce(NUM, DEN).0;
  const DEN: i64 = reduce(NUM, DEN).1;
}

impl<const NUM: i64, const DEN: i64> CommonPeriod<Ratio<NUM, DEN>> for Ratio<NUM, DEN> {
  type Output = Ratio<NUM, DEN>;
}

/// 1 / 1_000_000_000
pub type Nano = Ratio<1, 1_000_000_000>;
/// 1 / 1_000_000
pub type Micro = Ratio<1, 1_000_000>;
/// 1 / 1_000
pub type Milli = Ratio<1, 1_000>;
/// 1 / 100
pub type Centi = Ratio<1, 100>;
/// 1 / 10
pub type Deci = Ratio<1, 10>;
/// 1 / 1
pub type Unit = Ratio<1, 1>;
/// 10 / 1
pub type Deca = Ratio<10, 1>;
/// 100 / 1
pub type Hecto = Ratio<100, 1>;
/// 1_000 / 1
pub type Kilo = Ratio<1_000, 1>;
/// 1_000_000 / 1
pub type Mega = Ratio<1_000_000, 1>;
/// 1_000_000_000 / 1
pub type Giga = Ratio<1_000_000_000, 1>;
/// Seconds in a minute.
pub type Minute = Ratio<60, 1>;
/// Seconds in an hour.
pub type Hour = Ratio<3_600, 1>;
/// Seconds in a day.
pub type DayPeriod = Ratio<86_400, 1>;
/// Seconds in a week.
pub type WeekPeriod = Ratio<604_800, 1>;
/// Seconds in an average Gregorian month, one twelfth of [`YearPeriod`].
pub type MonthPeriod = Ratio<2_629_746, 1>;
/// Seconds in an average Gregorian year, 365.2425 days.
pub type YearPeriod = Ratio<31_556_952, 1>;

/// Greatest common divisor. Always non-negative.
#[inline]
pub const fn gcd(a: i64, b: i64) -> i64 {
  let mut lhs = a.wrapping_abs();
  let mut rhs = b.wrapping_abs();
  while rhs != 0 {
    let rem = lhs.wrapping_rem(rhs);
    lhs = rhs;
    rhs = rem;
  }
  lhs
}

/// Least common multiple. Always non-negative, zero if any of the operands is zero.
#[inline]
pub const fn lcm(a: i64, b: i64) -> i64 {
  if a == 0 || b == 0 {
    return 0;
  }
  a.wrapping_div(gcd(a, b)).wrapping_mul(b).wrapping_abs()
}

/// Reduced `P1 / P2` as a `(numerator, denominator)` pair.
#[inline]
pub const fn ratio_divide<P1, P2>() -> (i64, i64)
where
  P1: Period,
  P2: Period,
{
  let num_gcd = gcd(P1::NUM, P2::NUM);
  let den_gcd = gcd(P1::DEN, P2::DEN);
  reduce(
    (P1::NUM / num_gcd).wrapping_mul(P2::DEN / den_gcd),
    (P1::DEN / den_gcd).wrapping_mul(P2::NUM / num_gcd),
  )
}

/// Reduced `P1 * P2` as a `(numerator, denominator)` pair.
#[inline]
pub const fn ratio_multiply<P1, P2>() -> (i64, i64)
where
  P1: Period,
  P2: Period,
{
  let first = gcd(P1::NUM, P2::DEN);
  let second = gcd(P2::NUM, P1::DEN);
  reduce(
    (P1::NUM / first).wrapping_mul(P2::NUM / second),
    (P1::DEN / second).wrapping_mul(P2::DEN / first),
  )
}

const fn reduce(num: i64, den: i64) -> (i64, i64) {
  assert!(den != 0, "a ratio can not have a zero denominator");
  let divisor = gcd(num, den);
  let sign = if den < 0 { -1 } else { 1 };
  ((num / divisor).wrapping_mul(sign), (den / divisor).wrapping_mul(sign))
}

macro_rules! common_periods {
  () => {};
  (
    [$lhs:ty, $lhs_num:literal, $lhs_den:literal]
    $([$rhs:ty, $rhs_num:literal, $rhs_den:literal])*
  ) => {
    $(
      impl CommonPeriod<$rhs> for $lhs {
        type Output = Ratio<{ gcd($lhs_num, $rhs_num) }, { lcm($lhs_den, $rhs_den) }>;
      }

      impl CommonPeriod<$lhs> for $rhs {
        type Output = Ratio<{ gcd($lhs_num, $rhs_num) }, { lcm($lhs_den, $rhs_den) }>;
      }
    )*
    common_periods!($([$rhs, $rhs_num, $rhs_den])*);
  };
}

common_periods!(
  [Nano, 1, 1_000_000_000]
  [Micro, 1, 1_000_000]
  [Milli, 1, 1_000]
  [Centi, 1, 100]
  [Deci, 1, 10]
  [Unit, 1, 1]
  [Deca, 10, 1]
  [Hecto, 100, 1]
  [Kilo, 1_000, 1]
  [Mega, 1_000_000, 1]
  [Giga, 1_000_000_000, 1]
  [Minute, 60, 1]
  [Hour, 3_600, 1]
  [DayPeriod, 86_400, 1]
  [WeekPeriod, 604_800, 1]
  [MonthPeriod, 2_629_746, 1]
  [YearPeriod, 31_556_952, 1]
);
