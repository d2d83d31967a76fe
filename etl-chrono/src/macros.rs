/// Defines the three raw tick sources that feed [`crate::calendar::SystemClock`],
/// [`crate::calendar::SteadyClock`] and [`crate::calendar::HighResolutionClock`].
///
/// Must be invoked exactly once in the final binary. Each expression must evaluate to a
/// `fn() -> i64` that returns the number of ticks, in units of the respective clock duration,
/// elapsed since the clock epoch. Sources are expected to be callable from any thread.
///
/// ```ignore
/// etl_chrono::set_tick_sources!(
///   high_resolution: board::cycle_counter,
///   steady: board::millis_since_boot,
///   system: board::rtc_millis,
/// );
/// ```
#[macro_export]
macro_rules! set_tick_sources {
  (
    high_resolution: $high_resolution:expr,
    steady: $steady:expr,
    system: $system:expr $(,)?
  ) => {
    #[unsafe(no_mangle)]
    fn __etl_chrono_high_resolution_clock_ticks() -> i64 {
      let source: fn() -> i64 = $high_resolution;
      source()
    }

    #[unsafe(no_mangle)]
    fn __etl_chrono_steady_clock_ticks() -> i64 {
      let source: fn() -> i64 = $steady;
      source()
    }

    #[unsafe(no_mangle)]
    fn __etl_chrono_system_clock_ticks() -> i64 {
      let source: fn() -> i64 = $system;
      source()
    }
  };
}

macro_rules! _debug {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::debug!($($tt)+);
  };
}

macro_rules! _trace {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::trace!($($tt)+);
  };
}

// Arithmetic between a calendar type and one of its delta durations, both orders for addition.
macro_rules! _impl_delta_arithmetic {
  ($ty:ty, $delta:ty, $method:ident) => {
    impl core::ops::Add<$delta> for $ty {
      type Output = $ty;

      #[inline]
      fn add(self, rhs: $delta) -> Self::Output {
        self.$method(rhs)
      }
    }

    impl core::ops::Add<$ty> for $delta {
      type Output = $ty;

      #[inline]
      fn add(self, rhs: $ty) -> Self::Output {
        rhs.$method(self)
      }
    }

    impl core::ops::AddAssign<$delta> for $ty {
      #[inline]
      fn add_assign(&mut self, rhs: $delta) {
        *self = self.$method(rhs);
      }
    }

    impl core::ops::Sub<$delta> for $ty {
      type Output = $ty;

      #[inline]
      fn sub(self, rhs: $delta) -> Self::Output {
        // Two halves, `MIN` has no positive counterpart.
        let half = rhs.count() / 2;
        let rest = half.wrapping_sub(rhs.count());
        self.$method(<$delta>::new(half.wrapping_neg())).$method(<$delta>::new(rest))
      }
    }

    impl core::ops::SubAssign<$delta> for $ty {
      #[inline]
      fn sub_assign(&mut self, rhs: $delta) {
        *self = *self - rhs;
      }
    }
  };
}
