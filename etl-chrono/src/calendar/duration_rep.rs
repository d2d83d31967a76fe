use core::fmt::Debug;
use num_traits::{Bounded, Num, NumCast};

/// The representation that holds the values of both `Self` and `R`.
///
/// Floating-point wins over integers. Distinct integers meet at `i64`, or at `u64` when one of
/// them is `u64`.
pub trait CommonRep<R>: DurationRep
where
  R: DurationRep,
{
  /// Common representation
  type Output: DurationRep;
}

/// Numeric type that can hold the tick count of a [`crate::calendar::Duration`].
///
/// Integer arithmetic wraps around instead of panicking, floating-point arithmetic follows IEEE
/// semantics.
pub trait DurationRep: Bounded + Copy + Debug + Default + Num + NumCast + PartialOrd + 'static {
  /// If the representation is a floating-point number. Floating-point durations accept lossy
  /// implicit conversions.
  const IS_FLOAT: bool;
  /// Lowest representable value.
  const LOWEST: Self;
  /// Highest representable value.
  const MAX: Self;
  /// Zero
  const ZERO: Self;

  /// Unchecked conversion with `as` semantics.
  fn from_f64_lossy(value: f64) -> Self;

  /// Unchecked conversion with `as` semantics.
  fn from_i128_lossy(value: i128) -> Self;

  /// Unchecked conversion with `as` semantics.
  fn from_i64_lossy(value: i64) -> Self;

  /// Hashes the native-endian bytes of the value with [`crate::hash::generic_hash`].
  fn byte_hash(self) -> usize;

  /// Unchecked conversion with `as` semantics.
  fn to_f64_lossy(self) -> f64;

  /// Lossless for every integer representation, `as` semantics for floating-point ones.
  fn to_i128(self) -> i128;

  /// Unchecked conversion with `as` semantics.
  fn to_i64_lossy(self) -> i64;

  /// Addition
  fn wrapping_add(self, rhs: Self) -> Self;

  /// Division
  fn wrapping_div(self, rhs: Self) -> Self;

  /// Multiplication
  fn wrapping_mul(self, rhs: Self) -> Self;

  /// Negation
  fn wrapping_neg(self) -> Self;

  /// Remainder
  fn wrapping_rem(self, rhs: Self) -> Self;

  /// Subtraction
  fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_float {
  ($($ty:ty),*) => {
    $(
      impl DurationRep for $ty {
        const IS_FLOAT: bool = true;
        const LOWEST: Self = <$ty>::MIN;
        const MAX: Self = <$ty>::MAX;
        const ZERO: Self = 0.0;

        #[inline]
        fn from_f64_lossy(value: f64) -> Self {
          value as $ty
        }

        #[inline]
        fn from_i128_lossy(value: i128) -> Self {
          value as $ty
        }

        #[inline]
        fn from_i64_lossy(value: i64) -> Self {
          value as $ty
        }

        #[inline]
        fn byte_hash(self) -> usize {
          crate::hash::generic_hash(&self.to_ne_bytes())
        }

        #[inline]
        fn to_f64_lossy(self) -> f64 {
          self.into()
        }

        #[inline]
        fn to_i128(self) -> i128 {
          self as i128
        }

        #[inline]
        fn to_i64_lossy(self) -> i64 {
          self as i64
        }

        #[inline]
        fn wrapping_add(self, rhs: Self) -> Self {
          self + rhs
        }

        #[inline]
        fn wrapping_div(self, rhs: Self) -> Self {
          self / rhs
        }

        #[inline]
        fn wrapping_mul(self, rhs: Self) -> Self {
          self * rhs
        }

        #[inline]
        fn wrapping_neg(self) -> Self {
          -self
        }

        #[inline]
        fn wrapping_rem(self, rhs: Self) -> Self {
          self % rhs
        }

        #[inline]
        fn wrapping_sub(self, rhs: Self) -> Self {
          self - rhs
        }
      }
    )*
  };
}

macro_rules! impl_integer {
  ($($ty:ty),*) => {
    $(
      impl DurationRep for $ty {
        const IS_FLOAT: bool = false;
        const LOWEST: Self = <$ty>::MIN;
        const MAX: Self = <$ty>::MAX;
        const ZERO: Self = 0;

        #[inline]
        fn from_f64_lossy(value: f64) -> Self {
          value as $ty
        }

        #[inline]
        fn from_i128_lossy(value: i128) -> Self {
          value as $ty
        }

        #[inline]
        fn from_i64_lossy(value: i64) -> Self {
          value as $ty
        }

        #[inline]
        fn byte_hash(self) -> usize {
          crate::hash::generic_hash(&self.to_ne_bytes())
        }

        #[inline]
        fn to_f64_lossy(self) -> f64 {
          self as f64
        }

        #[inline]
        fn to_i128(self) -> i128 {
          self as i128
        }

        #[inline]
        fn to_i64_lossy(self) -> i64 {
          self as i64
        }

        #[inline]
        fn wrapping_add(self, rhs: Self) -> Self {
          <$ty>::wrapping_add(self, rhs)
        }

        #[inline]
        fn wrapping_div(self, rhs: Self) -> Self {
          <$ty>::wrapping_div(self, rhs)
        }

        #[inline]
        fn wrapping_mul(self, rhs: Self) -> Self {
          <$ty>::wrapping_mul(self, rhs)
        }

        #[inline]
        fn wrapping_neg(self) -> Self {
          <$ty>::wrapping_neg(self)
        }

        #[inline]
        fn wrapping_rem(self, rhs: Self) -> Self {
          <$ty>::wrapping_rem(self, rhs)
        }

        #[inline]
        fn wrapping_sub(self, rhs: Self) -> Self {
          <$ty>::wrapping_sub(self, rhs)
        }
      }
    )*
  };
}

impl_float!(f32, f64);
impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! common_reps {
  ($($lhs:ty => [$($rhs:ty => $out:ty),* $(,)?]),* $(,)?) => {
    $(
      $(
        impl CommonRep<$rhs> for $lhs {
          type Output = $out;
        }
      )*
    )*
  };
}

common_reps!(
  f32 => [
    f32 => f32, f64 => f64, i8 => f64, i16 => f64, i32 => f64,
    i64 => f64, u8 => f64, u16 => f64, u32 => f64, u64 => f64,
  ],
  f64 => [
    f32 => f64, f64 => f64, i8 => f64, i16 => f64, i32 => f64,
    i64 => f64, u8 => f64, u16 => f64, u32 => f64, u64 => f64,
  ],
  i8 => [
    f32 => f64, f64 => f64, i8 => i8, i16 => i64, i32 => i64,
    i64 => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64,
  ],
  i16 => [
    f32 => f64, f64 => f64, i8 => i64, i16 => i16, i32 => i64,
    i64 => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64,
  ],
  i32 => [
    f32 => f64, f64 => f64, i8 => i64, i16 => i64, i32 => i32,
    i64 => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64,
  ],
  i64 => [
    f32 => f64, f64 => f64, i8 => i64, i16 => i64, i32 => i64,
    i64 => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64,
  ],
  u8 => [
    f32 => f64, f64 => f64, i8 => i64, i16 => i64, i32 => i64,
    i64 => i64, u8 => u8, u16 => i64, u32 => i64, u64 => u64,
  ],
  u16 => [
    f32 => f64, f64 => f64, i8 => i64, i16 => i64, i32 => i64,
    i64 => i64, u8 => i64, u16 => u16, u32 => i64, u64 => u64,
  ],
  u32 => [
    f32 => f64, f64 => f64, i8 => i64, i16 => i64, i32 => i64,
    i64 => i64, u8 => i64, u16 => i64, u32 => u32, u64 => u64,
  ],
  u64 => [
    f32 => f64, f64 => f64, i8 => u64, i16 => u64, i32 => u64,
    i64 => u64, u8 => u64, u16 => u64, u32 => u64, u64 => u64,
  ],
);
