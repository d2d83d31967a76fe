//! Byte-oriented hashing with a fixed output, independent of the `core::hash` machinery.
//!
//! Every value type of [`crate::calendar`] implements [`ByteHash`] by feeding the native-endian
//! bytes of its fields to [`generic_hash`].

mod fnv1a_hasher;

pub use fnv1a_hasher::{Fnv1a32, Fnv1a64};

/// Types that can be hashed with [`generic_hash`].
pub trait ByteHash {
  /// Hash of the type's byte representation.
  fn byte_hash(&self) -> usize;
}

/// Hashes `bytes` with the FNV-1a variant that matches the pointer width of the target.
///
/// 64-bit targets use [`Fnv1a64`], 32-bit targets use [`Fnv1a32`] and 16-bit targets fold the
/// 32-bit result.
#[inline]
pub fn generic_hash(bytes: &[u8]) -> usize {
  #[cfg(target_pointer_width = "16")]
  {
    let hash = fnv1a_32(bytes);
    usize::from((hash ^ (hash >> 16)) as u16)
  }
  #[cfg(target_pointer_width = "32")]
  {
    fnv1a_32(bytes) as usize
  }
  #[cfg(target_pointer_width = "64")]
  {
    fnv1a_64(bytes) as usize
  }
}

/// FNV-1a 32 of `bytes`.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
  let mut hasher = Fnv1a32::new();
  hasher.write_bytes(bytes);
  hasher.value()
}

/// FNV-1a 64 of `bytes`.
#[inline]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
  let mut hasher = Fnv1a64::new();
  hasher.write_bytes(bytes);
  hasher.value()
}
