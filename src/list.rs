//! This module provides a singly linked association list, the baseline the
//! table is measured against.
//!
//! Inserting prepends a node in constant time. Fetching scans from the most
//! recently inserted node, so it takes time linear in the number of nodes.
//! Nodes borrow their records from the caller and never copy them.

use core::iter::FusedIterator;
use tracing::trace;

use crate::record::Record;

/// A prepend-only list of borrowed records.

pub struct List<'a, R> {
  head: Link<'a, R>,
  len: usize,
}

type Link<'a, R> = Option<Box<Node<'a, R>>>;

struct Node<'a, R> {
  key: &'a str,
  value: &'a R,
  next: Link<'a, R>,
}

impl<'a, R: Record> List<'a, R> {
  /// Creates an empty list.

  #[must_use]
  pub fn new() -> Self {
    return Self { head: None, len: 0 };
  }

  /// Returns the number of nodes.

  #[inline(always)]
  #[must_use]
  pub fn len(&self) -> usize {
    return self.len;
  }

  #[inline(always)]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    return self.head.is_none();
  }

  /// Returns a new list whose head refers to `record` and whose tail is this
  /// list.
  ///
  /// Existing nodes are not touched. Inserting a key that is already present
  /// shadows the older node, since `fetch` stops at the first match.

  #[must_use]
  pub fn insert(mut self, record: &'a R) -> Self {
    let key = record.key();
    let next = self.head.take();
    let len = self.len + 1;

    trace!(key, len, "prepended");

    return Self { head: Some(Box::new(Node { key, value: record, next })), len };
  }

  /// Returns the most recently inserted record stored under `key`.

  #[must_use]
  pub fn fetch(&self, key: &str) -> Option<&'a R> {
    return self.iter().find(|r| r.key() == key);
  }

  /// Returns an iterator over the records, newest first.

  #[inline]
  #[must_use]
  pub fn iter(&self) -> Iter<'_, 'a, R> {
    return Iter { link: self.head.as_deref(), size: self.len };
  }

  fn internal_depth(&self, key: &str) -> Option<usize> {
    let mut link = self.head.as_deref();
    let mut n = 0;

    while let Some(node) = link {
      if node.key == key { return Some(n); }
      link = node.next.as_deref();
      n = n + 1;
    }

    return None;
  }
}

// NB: The default drop glue would recurse once per node, which can overflow
// the stack for long lists.

impl<'a, R> Drop for List<'a, R> {
  fn drop(&mut self) {
    let mut link = self.head.take();

    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}

impl<'a, R: Record> Default for List<'a, R> {
  fn default() -> Self {
    return Self::new();
  }
}

/// Iterator returned by [`List::iter`].

pub struct Iter<'b, 'a, R> {
  link: Option<&'b Node<'a, R>>,
  size: usize,
}

impl<'b, 'a, R> Clone for Iter<'b, 'a, R> {
  fn clone(&self) -> Self {
    return Self { link: self.link, size: self.size };
  }
}

impl<'b, 'a, R> Iterator for Iter<'b, 'a, R> {
  type Item = &'a R;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let node = self.link?;

    self.link = node.next.as_deref();
    self.size = self.size - 1;

    return Some(node.value);
  }

  #[inline(always)]
  fn size_hint(&self) -> (usize, Option<usize>) {
    return (self.size, Some(self.size));
  }
}

impl<'b, 'a, R> ExactSizeIterator for Iter<'b, 'a, R> {
  #[inline(always)]
  fn len(&self) -> usize {
    return self.size;
  }
}

impl<'b, 'a, R> FusedIterator for Iter<'b, 'a, R> {}

pub mod internal {
  //! Unstable API exposing implementation details for benchmarks and tests.

  #![allow(missing_docs)]

  use super::List;
  use super::Record;

  /// The number of nodes before the first node holding `key`. A fetch of
  /// `key` visits `depth + 1` nodes.

  #[must_use]
  pub fn depth<R: Record>(l: &List<'_, R>, key: &str) -> Option<usize> {
    return l.internal_depth(key);
  }
}
