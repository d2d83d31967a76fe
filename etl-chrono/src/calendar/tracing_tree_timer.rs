#[cfg(test)]
mod tests;

use crate::calendar::{
  Clock, Days, HhMmSs, Hours, Milliseconds, Minutes, Seconds, SysDays, SystemClock, YearMonthDay,
  duration_cast,
};
use core::time::Duration;
use std::fmt::Write;
use tracing_tree::time::FormatTime;

const MILLISECONDS_PER_DAY: i64 = 86_400_000;

/// Invokes [`SystemClock`] for logging purposes.
#[derive(Debug)]
pub struct TracingTreeTimer;

impl FormatTime for TracingTreeTimer {
  #[inline]
  fn format_time(&self, w: &mut impl Write) -> core::fmt::Result {
    let millis = duration_cast::<Milliseconds>(SystemClock::now().time_since_epoch()).count();
    let days = i32::try_from(millis.div_euclid(MILLISECONDS_PER_DAY)).unwrap_or_default();
    let date = YearMonthDay::from_sys_days(SysDays::new(Days::new(days)));
    let time = HhMmSs::new(Milliseconds::new(millis.rem_euclid(MILLISECONDS_PER_DAY)));
    w.write_fmt(format_args!("{date}T{time}Z"))?;
    Ok(())
  }

  #[inline]
  fn style_timestamp(&self, _: bool, elapsed: Duration, w: &mut impl Write) -> core::fmt::Result {
    let millis = Milliseconds::new(i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX));
    let (num, unit) = if millis < Seconds::new(1) {
      (millis.count(), "ms")
    } else if millis < Minutes::new(1) {
      (duration_cast::<Seconds>(millis).count(), "s ")
    } else if millis < Hours::new(1) {
      (i64::from(duration_cast::<Minutes>(millis).count()), "m ")
    } else {
      (i64::from(duration_cast::<Hours>(millis).count()), "h ")
    };
    w.write_fmt(format_args!("{num:>3}{unit}"))
  }
}
