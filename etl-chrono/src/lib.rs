#![doc = include_str!("../README.md")]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

pub mod calendar;
mod error;
pub mod hash;
pub mod literals;
pub mod misc;
pub mod ratio;

pub use error::Error;

/// Shortcut of [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;
