#[cfg(test)]
mod tests;

use crate::{
  calendar::{Duration, DurationRep, Hours, Minutes, Seconds, duration_cast, misc::i64f64},
  ratio::Period,
};
use core::fmt::{Display, Formatter};

/// Splits a duration since midnight into hours, minutes, seconds and subseconds.
///
/// The sign is stored apart and every field holds an absolute value.
#[derive(Clone, Copy, Debug, Default)]
pub struct HhMmSs<R, P> {
  hours: Hours,
  is_negative: bool,
  minutes: Minutes,
  seconds: Seconds,
  subseconds: Duration<R, P>,
}

impl<R, P> HhMmSs<R, P>
where
  R: DurationRep,
  P: Period,
{
  /// Number of decimal digits needed to exactly represent the subseconds of `P`, or `6` if
  /// more than 18 digits would be required.
  pub const FRACTIONAL_WIDTH: u8 = fractional_width(P::DEN);

  /// Breaks down `duration`.
  #[inline]
  pub fn new(duration: Duration<R, P>) -> Self {
    let mut rest = duration.abs();
    let hours: Hours = duration_cast(rest);
    rest -= duration_cast::<Duration<R, P>>(hours);
    let minutes: Minutes = duration_cast(rest);
    rest -= duration_cast::<Duration<R, P>>(minutes);
    let seconds: Seconds = duration_cast(rest);
    rest -= duration_cast::<Duration<R, P>>(seconds);
    Self { hours, is_negative: duration.count() < R::ZERO, minutes, seconds, subseconds: rest }
  }

  /// Whole hours
  #[inline]
  pub const fn hours(&self) -> Hours {
    self.hours
  }

  /// If the split duration was negative.
  #[inline]
  pub const fn is_negative(&self) -> bool {
    self.is_negative
  }

  /// Whole minutes, from `0` to `59`.
  #[inline]
  pub const fn minutes(&self) -> Minutes {
    self.minutes
  }

  /// Whole seconds, from `0` to `59`.
  #[inline]
  pub const fn seconds(&self) -> Seconds {
    self.seconds
  }

  /// Remainder that is smaller than a second.
  #[inline]
  pub const fn subseconds(&self) -> Duration<R, P> {
    self.subseconds
  }

  /// Reassembles the split duration, sign included.
  #[inline]
  pub fn to_duration(&self) -> Duration<R, P> {
    let mut duration = duration_cast::<Duration<R, P>>(self.hours);
    duration += duration_cast(self.minutes);
    duration += duration_cast(self.seconds);
    duration += self.subseconds;
    if self.is_negative { -duration } else { duration }
  }
}

impl<R, P> Display for HhMmSs<R, P>
where
  R: DurationRep,
  P: Period,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    if self.is_negative {
      f.write_str("-")?;
    }
    write!(f, "{:02}:{:02}:{:02}", self.hours.count(), self.minutes.count(), self.seconds.count())?;
    let width = Self::FRACTIONAL_WIDTH;
    if width == 0 {
      return Ok(());
    }
    let scale = 10i64.pow(width.into());
    let fraction = if R::IS_FLOAT {
      let seconds = self.subseconds.count().to_f64_lossy() * i64f64(P::NUM) / i64f64(P::DEN);
      DurationRep::to_i64_lossy(seconds * i64f64(scale))
    } else {
      self.subseconds.count().to_i64_lossy().wrapping_mul(P::NUM).wrapping_mul(scale) / P::DEN
    };
    write!(f, ".{:0width$}", fraction, width = usize::from(width))
  }
}

/// If `hours` is within `[0, 12)`.
#[inline]
pub const fn is_am(hours: Hours) -> bool {
  hours.count() >= 0 && hours.count() < 12
}

/// If `hours` is within `[12, 24)`.
#[inline]
pub const fn is_pm(hours: Hours) -> bool {
  hours.count() >= 12 && hours.count() < 24
}

/// Maps a 24-hour clock value into the 12-hour clock, `0` becomes `12`. Values outside `[0, 24)`
/// are returned unchanged.
#[inline]
pub const fn make12(hours: Hours) -> Hours {
  match hours.count() {
    0 => Hours::new(12),
    13..=23 => Hours::new(hours.count() - 12),
    _ => hours,
  }
}

/// Maps a 12-hour clock value into the 24-hour clock. Values outside `[1, 12]` are returned
/// unchanged.
#[inline]
pub const fn make24(hours: Hours, is_pm: bool) -> Hours {
  match (hours.count(), is_pm) {
    (12, false) => Hours::new(0),
    (1..=11, true) => Hours::new(hours.count() + 12),
    _ => hours,
  }
}

const fn fractional_width(den: i64) -> u8 {
  let mut width = 0;
  let mut pow: i64 = 1;
  while width <= 18 {
    if pow % den == 0 {
      return width;
    }
    width += 1;
    pow = pow.wrapping_mul(10);
  }
  6
}
