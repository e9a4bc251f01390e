//! This module provides a fixed-capacity open-addressing table keyed by
//! strings, resolving collisions by double hashing.
//!
//! The table never grows. Its capacity is chosen once at construction, and
//! the caller controls the load factor through that choice. Keep the capacity
//! at least twice the number of records to keep probe chains short.
//!
//! # Collisions
//!
//! A record's home slot is `primary_hash(key)`. If the home slot is taken,
//! the `i`-th alternate slot is
//!
//! ```text
//! ((home + i) * ((secondary_hash(key) + i) % capacity)) % capacity
//! ```
//!
//! With the default [`Policy::OneShot`], `store` writes to the `i = 0`
//! alternate without checking it. Whatever record occupied that slot is
//! replaced. With [`Policy::Exhaustive`], `store` walks the sequence until it
//! reaches a free slot or one that already holds the same key. `fetch` walks
//! the same sequence under both policies. It stops at the first empty slot.

use core::ops::Index;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::error::Error;
use crate::hash::primary_hash;
use crate::hash::secondary_hash;
use crate::record::Record;

/// What `store` does when a record's home slot is already occupied.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
  /// Write to the first alternate slot, occupied or not.
  #[default]
  OneShot,
  /// Walk the probe sequence until a free slot or the same key is found.
  Exhaustive,
}

/// A fixed-capacity table holding owned copies of its records.

#[derive(Clone, Debug)]
pub struct HashTable<R: Record> {
  slots: Box<[Slot<R>]>,
  policy: Policy,
  len: usize,
}

#[derive(Clone, Debug)]
enum Slot<R> {
  Empty,
  Occupied(R),
}

// NB: `idx + i < 2 * capacity` and `stride < capacity`, and a slice never
// holds more than `isize::MAX` slots, so the product always fits in a `u128`.

#[inline(always)]
fn probe(idx: usize, h2: usize, i: usize, capacity: usize) -> usize {
  let c = capacity as u128;
  let stride = (h2 as u128 + i as u128) % c;

  return ((idx as u128 + i as u128) * stride % c) as usize;
}

impl<R: Record> HashTable<R> {
  /// Creates a table of `capacity` empty slots using [`Policy::OneShot`].
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.

  pub fn new(capacity: usize) -> Result<Self, Error> {
    return Self::with_policy(capacity, Policy::OneShot);
  }

  /// Creates a table of `capacity` empty slots using the given collision
  /// policy.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.

  pub fn with_policy(capacity: usize, policy: Policy) -> Result<Self, Error> {
    if capacity == 0 { return Err(Error::InvalidCapacity); }

    let slots = (0 .. capacity).map(|_| Slot::Empty).collect();

    debug!(capacity, ?policy, "initialized table");

    return Ok(Self { slots, policy, len: 0 });
  }

  /// Returns the number of slots. This never changes.

  #[inline(always)]
  #[must_use]
  pub fn capacity(&self) -> usize {
    return self.slots.len();
  }

  /// Returns the number of occupied slots.
  ///
  /// This can be lower than the number of successful stores, because a
  /// one-shot store may replace an earlier record.

  #[inline(always)]
  #[must_use]
  pub fn len(&self) -> usize {
    return self.len;
  }

  /// Returns whether every slot is empty.

  #[inline(always)]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    return self.len == 0;
  }

  #[inline(always)]
  #[must_use]
  pub fn policy(&self) -> Policy {
    return self.policy;
  }

  /// Returns whether a record with the given key can be fetched.

  #[inline]
  #[must_use]
  pub fn contains_key(&self, key: &str) -> bool {
    return self.internal_find(key).is_some();
  }

  /// Returns the record stored under `key`, if the probe sequence reaches it.

  #[inline]
  #[must_use]
  pub fn fetch(&self, key: &str) -> Option<&R> {
    let a = self.internal_find(key)?;

    return match &self.slots[a] {
      Slot::Occupied(r) => Some(r),
      Slot::Empty => None,
    };
  }

  /// Copies `record` into the table and returns the slot it was written to.
  ///
  /// Under [`Policy::OneShot`] this always succeeds. A collision can replace
  /// a record stored under a different key. That record is then lost, and a
  /// warning is logged.
  ///
  /// # Errors
  ///
  /// Under [`Policy::Exhaustive`], returns [`Error::TableFull`] if every slot
  /// on the record's probe sequence holds some other key.

  pub fn store(&mut self, record: &R) -> Result<usize, Error>
  where
    R: Clone,
  {
    let c = self.slots.len();
    let key = record.key();
    let idx = primary_hash(key, c);
    let h2 = secondary_hash(key, c);

    if let Slot::Empty = self.slots[idx] {
      self.internal_place(idx, record);
      return Ok(idx);
    }

    match self.policy {
      Policy::OneShot => {
        let a = probe(idx, h2, 0, c);
        self.internal_place(a, record);
        return Ok(a);
      }
      Policy::Exhaustive => {
        if self.internal_holds(idx, key) {
          self.internal_place(idx, record);
          return Ok(idx);
        }

        for i in 0 .. c {
          let a = probe(idx, h2, i, c);

          if let Slot::Empty = self.slots[a] {
            self.internal_place(a, record);
            return Ok(a);
          }

          if self.internal_holds(a, key) {
            self.internal_place(a, record);
            return Ok(a);
          }
        }

        return Err(Error::TableFull { key: key.to_owned() });
      }
    }
  }

  /// Returns an iterator over the stored records, in slot order.

  #[inline]
  #[must_use]
  pub fn values(&self) -> Values<'_, R> {
    return Values { slots: self.slots.iter() };
  }

  #[inline(always)]
  fn internal_holds(&self, a: usize, key: &str) -> bool {
    return match &self.slots[a] {
      Slot::Occupied(r) => r.key() == key,
      Slot::Empty => false,
    };
  }

  fn internal_place(&mut self, a: usize, record: &R)
  where
    R: Clone,
  {
    let key = record.key();
    let old = core::mem::replace(&mut self.slots[a], Slot::Occupied(record.clone()));

    match old {
      Slot::Empty => {
        self.len += 1;
        trace!(key, slot = a, "stored");
      }
      Slot::Occupied(old) => {
        if old.key() == key {
          trace!(key, slot = a, "replaced");
        } else {
          warn!(key, displaced = old.key(), slot = a, "store overwrote a different key");
        }
      }
    }
  }

  fn internal_find(&self, key: &str) -> Option<usize> {
    let c = self.slots.len();
    let idx = primary_hash(key, c);
    let h2 = secondary_hash(key, c);

    match &self.slots[idx] {
      Slot::Empty => return None,
      Slot::Occupied(r) => {
        if r.key() == key { return Some(idx); }
      }
    }

    for i in 0 .. c {
      let a = probe(idx, h2, i, c);

      match &self.slots[a] {
        Slot::Empty => return None,
        Slot::Occupied(r) => {
          if r.key() == key { return Some(a); }
        }
      }
    }

    return None;
  }

  fn internal_keys(&self) -> Vec<Option<&str>> {
    let mut keys = Vec::with_capacity(self.slots.len());

    for s in self.slots.iter() {
      keys.push(match s { Slot::Occupied(r) => Some(r.key()), Slot::Empty => None });
    }

    return keys;
  }

  fn internal_load_factor(&self) -> f64 {
    return self.len as f64 / self.slots.len() as f64;
  }
}

impl<R: Record> Index<&str> for HashTable<R> {
  type Output = R;

  #[inline]
  fn index(&self, key: &str) -> &Self::Output {
    return match self.fetch(key) {
      Some(r) => r,
      None => panic!("no record stored under key {:?}", key),
    };
  }
}

/// Iterator returned by [`HashTable::values`].

#[derive(Clone)]
pub struct Values<'a, R> {
  slots: core::slice::Iter<'a, Slot<R>>,
}

impl<'a, R> Iterator for Values<'a, R> {
  type Item = &'a R;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    for s in self.slots.by_ref() {
      if let Slot::Occupied(r) = s { return Some(r); }
    }

    return None;
  }
}

pub mod internal {
  //! Unstable API exposing implementation details for benchmarks and tests.

  #![allow(missing_docs)]

  use super::HashTable;
  use super::Record;

  /// The slot at which `fetch` finds `key`.

  #[must_use]
  pub fn slot_of<R: Record>(t: &HashTable<R>, key: &str) -> Option<usize> {
    return t.internal_find(key);
  }

  /// The key held by every slot, in slot order.

  #[must_use]
  pub fn keys<R: Record>(t: &HashTable<R>) -> Vec<Option<&str>> {
    return t.internal_keys();
  }

  #[must_use]
  pub fn load_factor<R: Record>(t: &HashTable<R>) -> f64 {
    return t.internal_load_factor();
  }

  /// The `i`-th alternate slot for a key with the given home slot and stride.

  #[must_use]
  pub fn probe(idx: usize, h2: usize, i: usize, capacity: usize) -> usize {
    return super::probe(idx, h2, i, capacity);
  }
}
