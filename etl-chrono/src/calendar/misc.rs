// FIXME(stable): Constant traits

pub(crate) const fn i16i32(val: i16) -> i32 {
  val as i32
}

pub(crate) const fn i32i16(val: i32) -> i16 {
  val as i16
}

pub(crate) const fn i32u32(val: i32) -> u32 {
  val as u32
}

pub(crate) const fn i32u8(val: i32) -> u8 {
  val as u8
}

pub(crate) const fn i64f64(val: i64) -> f64 {
  val as f64
}

pub(crate) const fn u8i32(val: u8) -> i32 {
  val as i32
}

pub(crate) const fn u8u32(val: u8) -> u32 {
  val as u32
}

pub(crate) const fn u8usize(val: u8) -> usize {
  val as usize
}

pub(crate) const fn u32u8(val: u32) -> u8 {
  val as u8
}
