use crate::calendar::CalendarError;
use core::{
  fmt::{Debug, Display, Formatter},
  num::TryFromIntError,
};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  /// See [`CalendarError`].
  CalendarError(CalendarError),
  /// See [`TryFromIntError`].
  TryFromIntError(TryFromIntError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<CalendarError> for Error {
  #[inline]
  fn from(from: CalendarError) -> Self {
    Self::CalendarError(from)
  }
}

impl From<TryFromIntError> for Error {
  #[inline]
  fn from(from: TryFromIntError) -> Self {
    Self::TryFromIntError(from)
  }
}

impl From<Error> for () {
  #[inline]
  fn from(_: Error) -> Self {}
}
