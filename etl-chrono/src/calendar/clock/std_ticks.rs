//! Tick sources backed by `std::time`, meant to be handed to [`crate::set_tick_sources`] on
//! hosted targets.
//!
//! ```ignore
//! etl_chrono::set_tick_sources!(
//!   high_resolution: etl_chrono::calendar::std_ticks::high_resolution,
//!   steady: etl_chrono::calendar::std_ticks::steady,
//!   system: etl_chrono::calendar::std_ticks::system,
//! );
//! ```

use crate::calendar::{
  HighResolutionClockDuration, IsDuration, Nanoseconds, SteadyClockDuration, SystemClockDuration,
  duration_cast,
};
use std::{
  sync::OnceLock,
  time::{Instant, SystemTime, UNIX_EPOCH},
};

static START: OnceLock<Instant> = OnceLock::new();

/// Ticks of [`HighResolutionClockDuration`] since the first call of any steady source.
#[inline]
pub fn high_resolution() -> i64 {
  ticks::<HighResolutionClockDuration>(start().elapsed())
}

/// Ticks of [`SteadyClockDuration`] since the first call of any steady source.
#[inline]
pub fn steady() -> i64 {
  ticks::<SteadyClockDuration>(start().elapsed())
}

/// Ticks of [`SystemClockDuration`] since 1970-01-01 00:00:00 UTC. Zero if the system time is
/// set before the epoch.
#[inline]
pub fn system() -> i64 {
  ticks::<SystemClockDuration>(SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default())
}

fn start() -> Instant {
  *START.get_or_init(Instant::now)
}

fn ticks<D>(elapsed: core::time::Duration) -> i64
where
  D: IsDuration<Rep = i64>,
{
  let nanos = i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX);
  duration_cast::<D>(Nanoseconds::new(nanos)).into_duration().count()
}
