
use crate::{
  calendar::{duration_rep::CommonRep, Days, Duration, DurationRep, IsDuration, Seconds, SystemClock},
  hash::ByteHash,
  ratio::{CommonPeriod, Period},
};
use core::{
  cmp::Ordering,
  fmt::{Debug, Formatter},
  hash::{Hash, Hasher},
  marker::PhantomData,
  ops::{Add, AddAssign, Sub, SubAssign},
};

/// Time point of [`SystemClock`] with a custom duration.
pub type SysTime<D> = TimePoint<SystemClock, D>;
/// Days since 1970-01-01.
pub type SysDays = SysTime<Days>;
/// Seconds since 1970-01-01.
pub type SysSeconds = SysTime<Seconds>;

/// Changes the duration of a time point without changing its clock. Truncates like
/// [`crate::calendar::duration_cast`].
#[inline]
pub fn time_point_cast<To, C>(from: TimePoint<C, impl IsDuration>) -> TimePoint<C, To>
where
  To: IsDuration,
{
  TimePoint::new(from.duration.into_duration().cast())
}

/// A duration measured from the epoch of the clock `C`.
///
/// Time points of different clocks can not be compared or mixed.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TimePoint<C, D> {
  duration: D,
  #[cfg_attr(feature = "serde", serde(skip))]
  clock: PhantomData<C>,
}

impl<C, D> TimePoint<C, D> {
  /// Instance located `duration` after the epoch.
  #[inline]
  pub const fn new(duration: D) -> Self {
    Self { duration, clock: PhantomData }
  }
}

impl<C, D> TimePoint<C, D>
where
  D: IsDuration,
{
  /// Duration elapsed since the epoch.
  #[inline]
  pub const fn time_since_epoch(&self) -> D {
    self.duration
  }

  /// See [`time_point_cast`].
  #[inline]
  pub fn cast<To>(self) -> TimePoint<C, To>
  where
    To: IsDuration,
  {
    time_point_cast(self)
  }
}

impl<C, R, P> TimePoint<C, Duration<R, P>>
where
  R: DurationRep,
  P: Period,
{
  /// Latest representable time point.
  #[inline]
  pub const fn max() -> Self {
    Self::new(Duration::max())
  }

  /// Earliest representable time point.
  #[inline]
  pub const fn min() -> Self {
    Self::new(Duration::min())
  }

  /// Lossless conversion from a time point of the same clock, see [`Duration::from_duration`].
  #[inline]
  pub fn from_time_point<R2, P2>(other: TimePoint<C, Duration<R2, P2>>) -> Self
  where
    R2: DurationRep,
    P2: Period,
  {
    Self::new(Duration::from_duration(other.duration))
  }
}

impl<C, D> ByteHash for TimePoint<C, D>
where
  D: ByteHash,
{
  #[inline]
  fn byte_hash(&self) -> usize {
    self.duration.byte_hash()
  }
}

impl<C, D> Clone for TimePoint<C, D>
where
  D: Clone,
{
  #[inline]
  fn clone(&self) -> Self {
    Self::new(self.duration.clone())
  }
}

impl<C, D> Copy for TimePoint<C, D> where D: Copy {}

impl<C, D> Debug for TimePoint<C, D>
where
  D: Debug,
{
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("TimePoint").field("duration", &self.duration).finish()
  }
}

impl<C, D> Default for TimePoint<C, D>
where
  D: Default,
{
  #[inline]
  fn default() -> Self {
    Self::new(D::default())
  }
}

impl<C, R, P> Eq for TimePoint<C, Duration<R, P>>
where
  R: DurationRep + Eq,
  P: Period,
{
}

impl<C, D> Hash for TimePoint<C, D>
where
  D: Hash,
{
  #[inline]
  fn hash<H>(&self, state: &mut H)
  where
    H: Hasher,
  {
    self.duration.hash(state);
  }
}

impl<C, R, P> Ord for TimePoint<C, Duration<R, P>>
where
  R: DurationRep + Ord,
  P: Period,
{
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.duration.cmp(&other.duration)
  }
}

impl<C, R1, P1, R2, P2> PartialEq<TimePoint<C, Duration<R2, P2>>> for TimePoint<C, Duration<R1, P1>>
where
  R1: DurationRep,
  P1: Period,
  R2: DurationRep,
  P2: Period,
{
  #[inline]
  fn eq(&self, other: &TimePoint<C, Duration<R2, P2>>) -> bool {
    self.duration == other.duration
  }
}

impl<C, R1, P1, R2, P2> PartialOrd<TimePoint<C, Duration<R2, P2>>>
  for TimePoint<C, Duration<R1, P1>>
where
  R1: DurationRep,
  P1: Period,
  R2: DurationRep,
  P2: Period,
{
  #[inline]
  fn partial_cmp(&self, other: &TimePoint<C, Duration<R2, P2>>) -> Option<Ordering> {
    self.duration.partial_cmp(&other.duration)
  }
}

impl<C, R1, P1, R2, P2> Add<Duration<R2, P2>> for TimePoint<C, Duration<R1, P1>>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output =
    TimePoint<C, Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>>;

  #[inline]
  fn add(self, rhs: Duration<R2, P2>) -> Self::Output {
    TimePoint::new(self.duration + rhs)
  }
}

impl<C, R1, P1, R2, P2> Add<TimePoint<C, Duration<R2, P2>>> for Duration<R1, P1>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output =
    TimePoint<C, Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>>;

  #[inline]
  fn add(self, rhs: TimePoint<C, Duration<R2, P2>>) -> Self::Output {
    TimePoint::new(self + rhs.duration)
  }
}

impl<C, R, P> AddAssign<Duration<R, P>> for TimePoint<C, Duration<R, P>>
where
  R: DurationRep,
  P: Period,
{
  #[inline]
  fn add_assign(&mut self, rhs: Duration<R, P>) {
    self.duration += rhs;
  }
}

impl<C, R1, P1, R2, P2> Sub<Duration<R2, P2>> for TimePoint<C, Duration<R1, P1>>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output =
    TimePoint<C, Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>>;

  #[inline]
  fn sub(self, rhs: Duration<R2, P2>) -> Self::Output {
    TimePoint::new(self.duration - rhs)
  }
}

impl<C, R1, P1, R2, P2> Sub<TimePoint<C, Duration<R2, P2>>> for TimePoint<C, Duration<R1, P1>>
where
  R1: CommonRep<R2>,
  P1: CommonPeriod<P2>,
  R2: DurationRep,
  P2: Period,
{
  type Output = Duration<<R1 as CommonRep<R2>>::Output, <P1 as CommonPeriod<P2>>::Output>;

  #[inline]
  fn sub(self, rhs: TimePoint<C, Duration<R2, P2>>) -> Self::Output {
    self.duration - rhs.duration
  }
}

impl<C, R, P> SubAssign<Duration<R, P>> for TimePoint<C, Duration<R, P>>
where
  R: DurationRep,
  P: Period,
{
  #[inline]
  fn sub_assign(&mut self, rhs: Duration<R, P>) {
    self.duration -= rhs;
  }
}
