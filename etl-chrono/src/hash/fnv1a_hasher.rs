use core::{hash::Hasher, ops::BitXor};

const OFFSET_32: u32 = 0x811c_9dc5;
const OFFSET_64: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME_32: u32 = 0x0100_0193;
const PRIME_64: u64 = 0x0000_0100_0000_01b3;

/// <http://www.isthe.com/chongo/tech/comp/fnv/index.html>
///
/// 32-bit Fowler–Noll–Vo hash. Has a fixed output standard, as such, it can be persisted or sent
/// to other machines.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a32(u32);

impl Fnv1a32 {
  /// Creates a default instance.
  #[inline]
  pub const fn new() -> Self {
    Self(OFFSET_32)
  }

  /// Creates a instance with a given seed.
  #[inline]
  pub const fn with_seed(seed: u32) -> Self {
    Self(seed)
  }

  /// Current state
  #[inline]
  pub const fn value(&self) -> u32 {
    self.0
  }

  /// Feeds `bytes` into the current state.
  #[inline]
  pub fn write_bytes(&mut self, bytes: &[u8]) {
    for byte in bytes.iter().copied() {
      let into: u32 = byte.into();
      self.0 = self.0.bitxor(into).wrapping_mul(PRIME_32);
    }
  }
}

impl Default for Fnv1a32 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Hasher for Fnv1a32 {
  #[inline]
  fn finish(&self) -> u64 {
    self.0.into()
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.write_bytes(bytes);
  }
}

/// <http://www.isthe.com/chongo/tech/comp/fnv/index.html>
///
/// 64-bit Fowler–Noll–Vo hash. Has a fixed output standard, as such, it can be persisted or sent
/// to other machines.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
  /// Creates a default instance.
  #[inline]
  pub const fn new() -> Self {
    Self(OFFSET_64)
  }

  /// Creates a instance with a given seed.
  #[inline]
  pub const fn with_seed(seed: u64) -> Self {
    Self(seed)
  }

  /// Current state
  #[inline]
  pub const fn value(&self) -> u64 {
    self.0
  }

  /// Feeds `bytes` into the current state.
  #[inline]
  pub fn write_bytes(&mut self, bytes: &[u8]) {
    for byte in bytes.iter().copied() {
      let into: u64 = byte.into();
      self.0 = self.0.bitxor(into).wrapping_mul(PRIME_64);
    }
  }
}

impl Default for Fnv1a64 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Hasher for Fnv1a64 {
  #[inline]
  fn finish(&self) -> u64 {
    self.0
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.write_bytes(bytes);
  }
}
