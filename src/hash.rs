//! The two string hash functions behind the table's double hashing.
//!
//! Both functions panic if `capacity` is zero. `HashTable` rejects a zero
//! capacity at construction, so it never calls them with one.

const PRIMARY_MULTIPLIER: i32 = 31;

const SECONDARY_BASE: u128 = 256;

/// Returns the home slot of `key` in a table of `capacity` slots.
///
/// The accumulator is a signed 32-bit integer that wraps on overflow, so long
/// keys can accumulate to a negative value. The remainder keeps the sign of
/// the accumulator and is shifted back into `[0, capacity)`.

#[inline]
#[must_use]
pub fn primary_hash(key: &str, capacity: usize) -> usize {
  let acc = accumulate(key);
  let c = capacity as i128;

  let mut idx = acc as i128 % c;

  if idx < 0 { idx += c; }

  return idx as usize;
}

/// Returns the probe stride of `key` in a table of `capacity` slots.
///
/// The result is reduced after every byte and is always in
/// `[0, capacity)`. It can be zero for ordinary keys (`"AA"` at capacity 5),
/// which collapses the first alternate slot onto slot zero.

#[inline]
#[must_use]
pub fn secondary_hash(key: &str, capacity: usize) -> usize {
  let c = capacity as u128;

  let mut h = 0u128;

  for &b in key.as_bytes() {
    h = (h * SECONDARY_BASE + b as u128) % c;
  }

  return h as usize;
}

#[inline(always)]
fn accumulate(key: &str) -> i32 {
  let mut acc = 0i32;

  for &b in key.as_bytes() {
    acc = acc.wrapping_mul(PRIMARY_MULTIPLIER).wrapping_add(b as i32);
  }

  return acc;
}

pub mod internal {
  //! Unstable API exposing implementation details for benchmarks and tests.

  #![allow(missing_docs)]

  /// The raw polynomial accumulator, before reduction.

  #[must_use]
  pub fn accumulate(key: &str) -> i32 {
    return super::accumulate(key);
  }
}
