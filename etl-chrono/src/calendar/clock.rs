#[cfg(feature = "std")]
pub mod std_ticks;

use crate::calendar::{IsDuration, Seconds, TimePoint, duration_cast, time_point_cast};

/// Duration of [`HighResolutionClock`], selected by the `high-resolution-clock-*` features.
#[cfg(feature = "high-resolution-clock-microseconds")]
pub type HighResolutionClockDuration = crate::calendar::Microseconds;
/// Duration of [`HighResolutionClock`], selected by the `high-resolution-clock-*` features.
#[cfg(all(
  feature = "high-resolution-clock-milliseconds",
  not(feature = "high-resolution-clock-microseconds")
))]
pub type HighResolutionClockDuration = crate::calendar::Milliseconds;
/// Duration of [`HighResolutionClock`], selected by the `high-resolution-clock-*` features.
#[cfg(not(any(
  feature = "high-resolution-clock-microseconds",
  feature = "high-resolution-clock-milliseconds"
)))]
pub type HighResolutionClockDuration = crate::calendar::Nanoseconds;

/// Duration of [`SteadyClock`], selected by the `steady-clock-*` features.
#[cfg(feature = "steady-clock-nanoseconds")]
pub type SteadyClockDuration = crate::calendar::Nanoseconds;
/// Duration of [`SteadyClock`], selected by the `steady-clock-*` features.
#[cfg(all(feature = "steady-clock-microseconds", not(feature = "steady-clock-nanoseconds")))]
pub type SteadyClockDuration = crate::calendar::Microseconds;
/// Duration of [`SteadyClock`], selected by the `steady-clock-*` features.
#[cfg(all(
  feature = "steady-clock-seconds",
  not(any(feature = "steady-clock-microseconds", feature = "steady-clock-nanoseconds"))
))]
pub type SteadyClockDuration = Seconds;
/// Duration of [`SteadyClock`], selected by the `steady-clock-*` features.
#[cfg(not(any(
  feature = "steady-clock-microseconds",
  feature = "steady-clock-nanoseconds",
  feature = "steady-clock-seconds"
)))]
pub type SteadyClockDuration = crate::calendar::Milliseconds;

/// Duration of [`SystemClock`], selected by the `system-clock-*` features.
#[cfg(feature = "system-clock-nanoseconds")]
pub type SystemClockDuration = crate::calendar::Nanoseconds;
/// Duration of [`SystemClock`], selected by the `system-clock-*` features.
#[cfg(all(feature = "system-clock-microseconds", not(feature = "system-clock-nanoseconds")))]
pub type SystemClockDuration = crate::calendar::Microseconds;
/// Duration of [`SystemClock`], selected by the `system-clock-*` features.
#[cfg(all(
  feature = "system-clock-seconds",
  not(any(feature = "system-clock-microseconds", feature = "system-clock-nanoseconds"))
))]
pub type SystemClockDuration = Seconds;
/// Duration of [`SystemClock`], selected by the `system-clock-*` features.
#[cfg(not(any(
  feature = "system-clock-microseconds",
  feature = "system-clock-nanoseconds",
  feature = "system-clock-seconds"
)))]
pub type SystemClockDuration = crate::calendar::Milliseconds;

unsafe extern "Rust" {
  safe fn __etl_chrono_high_resolution_clock_ticks() -> i64;
  safe fn __etl_chrono_steady_clock_ticks() -> i64;
  safe fn __etl_chrono_system_clock_ticks() -> i64;
}

/// Converts a time point of one clock into a time point of another clock.
///
/// Both epochs are assumed to be the same instant, only the duration is converted.
#[inline]
pub fn clock_cast<To, C>(from: TimePoint<C, impl IsDuration>) -> TimePoint<To, To::Duration>
where
  To: Clock,
{
  TimePoint::new(time_point_cast::<To::Duration, C>(from).time_since_epoch())
}

/// Source of time points.
///
/// The raw ticks of the provided clocks are defined by the final binary through
/// [`crate::set_tick_sources`].
pub trait Clock: Copy {
  /// Resolution of the clock.
  type Duration: IsDuration;

  /// If time points returned by [`Self::now`] never decrease.
  const IS_STEADY: bool;

  /// Current time point.
  fn now() -> TimePoint<Self, Self::Duration>;
}

/// Clock with the highest available resolution.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HighResolutionClock;

impl Clock for HighResolutionClock {
  type Duration = HighResolutionClockDuration;

  const IS_STEADY: bool = cfg!(not(feature = "high-resolution-clock-unsteady"));

  #[inline]
  fn now() -> TimePoint<Self, Self::Duration> {
    TimePoint::new(HighResolutionClockDuration::new(__etl_chrono_high_resolution_clock_ticks()))
  }
}

/// Monotonic clock, usually counting from the boot of the device.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SteadyClock;

impl Clock for SteadyClock {
  type Duration = SteadyClockDuration;

  const IS_STEADY: bool = true;

  #[inline]
  fn now() -> TimePoint<Self, Self::Duration> {
    TimePoint::new(SteadyClockDuration::new(__etl_chrono_steady_clock_ticks()))
  }
}

/// Wall clock, counting from 1970-01-01 00:00:00 UTC.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SystemClock;

impl SystemClock {
  /// Time point located `time` seconds after the epoch.
  #[inline]
  pub fn from_time_t(time: i64) -> TimePoint<Self, SystemClockDuration> {
    TimePoint::new(duration_cast(Seconds::new(time)))
  }

  /// Whole seconds elapsed since the epoch.
  #[inline]
  pub fn to_time_t(time_point: TimePoint<Self, SystemClockDuration>) -> i64 {
    duration_cast::<Seconds>(time_point.time_since_epoch()).count()
  }
}

impl Clock for SystemClock {
  type Duration = SystemClockDuration;

  const IS_STEADY: bool = cfg!(not(feature = "system-clock-unsteady"));

  #[inline]
  fn now() -> TimePoint<Self, Self::Duration> {
    TimePoint::new(SystemClockDuration::new(__etl_chrono_system_clock_ticks()))
  }
}
