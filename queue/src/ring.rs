//! Fixed-size circular storage used by the blocking queue.
//!
//! The ring performs no synchronization of its own; the queue only touches it
//! while holding its lock.

use std::collections::TryReserveError;
use std::fmt;

/// A ring of `capacity` slots that never grows.
///
/// Occupied slots are exactly `[head, head + len) mod capacity`; every other
/// slot is `None`.
pub(crate) struct RingBuffer<T> {
  slots: Box<[Option<T>]>,
  head: usize, // Oldest occupied slot (valid when len > 0)
  tail: usize, // Next slot to write
  len: usize,
}

impl<T> fmt::Debug for RingBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RingBuffer")
      .field("capacity", &self.slots.len())
      .field("head", &self.head)
      .field("tail", &self.tail)
      .field("len", &self.len)
      .finish()
  }
}

impl<T> RingBuffer<T> {
  /// Reserves storage for exactly `capacity` slots, reporting allocation
  /// failure instead of aborting. `capacity` must be non-zero.
  pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
    debug_assert!(capacity > 0, "ring capacity must be non-zero");
    let mut slots: Vec<Option<T>> = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize_with(capacity, || None);
    Ok(Self {
      slots: slots.into_boxed_slice(),
      head: 0,
      tail: 0,
      len: 0,
    })
  }

  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.len()
  }

  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub(crate) fn is_empty(&self) -> bool {
    self.len == 0
  }

  #[inline]
  pub(crate) fn is_full(&self) -> bool {
    self.len == self.slots.len()
  }

  /// Stores `value` at the tail. Hands it back if every slot is occupied.
  pub(crate) fn push_back(&mut self, value: T) -> Result<(), T> {
    if self.is_full() {
      return Err(value);
    }
    debug_assert!(self.slots[self.tail].is_none());
    self.slots[self.tail] = Some(value);
    self.tail = (self.tail + 1) % self.slots.len();
    self.len += 1;
    Ok(())
  }

  /// Takes the oldest element, leaving its slot empty.
  pub(crate) fn pop_front(&mut self) -> Option<T> {
    if self.is_empty() {
      return None;
    }
    let value = self.slots[self.head].take();
    debug_assert!(value.is_some(), "occupied slot was empty");
    self.head = (self.head + 1) % self.slots.len();
    self.len -= 1;
    value
  }
}
