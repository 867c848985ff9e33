use crate::error::BuildError;
use crate::queue::BlockingQueue;

use core::fmt;
use std::marker::PhantomData;

/// Externally supplied settings for a queue.
///
/// With the `serde` feature enabled this can be read from any serde format,
/// e.g. `{ "capacity": 64, "name": "ingest" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueConfig {
  /// Number of slots. Must be greater than zero.
  pub capacity: usize,
  /// Label used in log events and `Debug` output.
  #[cfg_attr(feature = "serde", serde(default))]
  pub name: Option<String>,
}

/// A builder for creating `BlockingQueue` instances.
///
/// ```
/// use fibre_queue::{BlockingQueue, QueueBuilder};
///
/// let queue: BlockingQueue<u32> = QueueBuilder::new()
///   .capacity(8)
///   .name("jobs")
///   .build()
///   .unwrap();
/// assert_eq!(queue.capacity(), 8);
/// assert_eq!(queue.name(), Some("jobs"));
/// ```
pub struct QueueBuilder<T> {
  capacity: usize,
  name: Option<String>,
  _marker: PhantomData<fn() -> T>,
}

// Manual impls so the builder does not require `T: Debug`, `T: Clone` or `T: Default`.
impl<T> fmt::Debug for QueueBuilder<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("QueueBuilder")
      .field("capacity", &self.capacity)
      .field("name", &self.name)
      .finish()
  }
}

impl<T> Clone for QueueBuilder<T> {
  fn clone(&self) -> Self {
    Self {
      capacity: self.capacity,
      name: self.name.clone(),
      _marker: PhantomData,
    }
  }
}

impl<T> Default for QueueBuilder<T> {
  fn default() -> Self {
    Self {
      capacity: 0,
      name: None,
      _marker: PhantomData,
    }
  }
}

impl<T> QueueBuilder<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts a builder from a `QueueConfig`.
  pub fn from_config(config: &QueueConfig) -> Self {
    Self {
      capacity: config.capacity,
      name: config.name.clone(),
      _marker: PhantomData,
    }
  }

  /// Sets the fixed number of slots.
  pub fn capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Labels the queue in log events.
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Builds the queue, reserving all of its storage up front.
  pub fn build(self) -> Result<BlockingQueue<T>, BuildError> {
    BlockingQueue::with_name(self.capacity, self.name)
  }
}
