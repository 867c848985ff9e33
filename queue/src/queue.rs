// src/queue.rs

//! The bounded blocking queue.
//!
//! All state lives behind a single `parking_lot::Mutex`. Two condition
//! variables hang off that lock: `not_full` wakes producers waiting for a free
//! slot and `not_empty` wakes consumers waiting for an element. Each
//! successful insert or removal wakes one waiter on the opposite side, while
//! shutdown wakes every waiter on both sides so they can re-evaluate against
//! the new state.
//!
//! Every wait sits in a loop that re-checks its condition after waking, so
//! spurious wake-ups and competing waiters are harmless.

use crate::builder::QueueBuilder;
use crate::error::{BuildError, EnqueueError, TryDequeueError, TryEnqueueError};
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::ring::RingBuffer;

use std::fmt;

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace};

/// The lifecycle phase of a queue.
///
/// Transitions only go forward: `Active` to `Draining` or `ShutdownEmpty`, and
/// `Draining` to `ShutdownEmpty` as consumers take the remaining elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
  /// Not shut down; enqueues and dequeues proceed normally.
  Active,
  /// Shut down with elements left. Dequeues still succeed, enqueues are refused.
  Draining,
  /// Shut down and empty. Dequeues return immediately with nothing.
  ShutdownEmpty,
}

struct State<T> {
  ring: RingBuffer<T>,
  // Never reset once set.
  shutdown: bool,
  metrics: Metrics,
}

/// A fixed-capacity, thread-safe FIFO queue with blocking `enqueue`/`dequeue`
/// and a one-way, broadcast `shutdown`.
///
/// The queue is shared by reference (usually through an `Arc`); every method
/// takes `&self`. Ownership of an element moves into the queue on a successful
/// enqueue and moves out to exactly one consumer on dequeue.
///
/// ```
/// use fibre_queue::BlockingQueue;
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(BlockingQueue::new(2).unwrap());
///
/// let producer = {
///   let queue = Arc::clone(&queue);
///   thread::spawn(move || {
///     for i in 0..5 {
///       queue.enqueue(i).unwrap();
///     }
///     queue.shutdown();
///   })
/// };
///
/// let mut received = Vec::new();
/// while let Some(item) = queue.dequeue() {
///   received.push(item);
/// }
/// producer.join().unwrap();
/// assert_eq!(received, vec![0, 1, 2, 3, 4]);
/// ```
pub struct BlockingQueue<T> {
  state: Mutex<State<T>>,
  // "Space became available."
  not_full: Condvar,
  // "An element became available."
  not_empty: Condvar,
  capacity: usize,
  name: Option<String>,
}

impl<T> BlockingQueue<T> {
  /// Creates an empty queue with room for exactly `capacity` elements.
  ///
  /// Fails with [`BuildError::ZeroCapacity`] if `capacity` is zero, or with
  /// [`BuildError::Allocation`] if the slots cannot be allocated.
  pub fn new(capacity: usize) -> Result<Self, BuildError> {
    Self::with_name(capacity, None)
  }

  /// Returns a builder for configuring a queue. The element type is taken
  /// from the queue being built.
  pub fn builder() -> QueueBuilder<T> {
    QueueBuilder::new()
  }

  pub(crate) fn with_name(capacity: usize, name: Option<String>) -> Result<Self, BuildError> {
    if capacity == 0 {
      return Err(BuildError::ZeroCapacity);
    }
    let ring = RingBuffer::try_with_capacity(capacity)
      .map_err(|source| BuildError::Allocation { capacity, source })?;

    let queue = Self {
      state: Mutex::new(State {
        ring,
        shutdown: false,
        metrics: Metrics::default(),
      }),
      not_full: Condvar::new(),
      not_empty: Condvar::new(),
      capacity,
      name,
    };
    debug!(queue = queue.label(), capacity, "blocking queue created");
    Ok(queue)
  }

  /// Inserts `item` at the back of the queue, blocking the current thread
  /// while the queue is full.
  ///
  /// If the queue is shut down before a slot frees up (or was already shut
  /// down), the element is not inserted and comes back in
  /// [`EnqueueError::Shutdown`]. Shutdown always wins over a pending insert.
  pub fn enqueue(&self, mut item: T) -> Result<(), EnqueueError<T>> {
    let mut state = self.state.lock();
    loop {
      if state.shutdown {
        state.metrics.rejected += 1;
        drop(state);
        trace!(queue = self.label(), "enqueue refused, queue is shut down");
        return Err(EnqueueError::Shutdown(item));
      }
      match state.ring.push_back(item) {
        Ok(()) => break,
        Err(returned) => {
          item = returned;
          state.metrics.producer_waits += 1;
          trace!(queue = self.label(), "producer waiting for a free slot");
          self.not_full.wait(&mut state);
        }
      }
    }
    state.metrics.enqueued += 1;
    self.not_empty.notify_one();
    Ok(())
  }

  /// Attempts to insert `item` without blocking.
  pub fn try_enqueue(&self, item: T) -> Result<(), TryEnqueueError<T>> {
    let mut state = self.state.lock();
    if state.shutdown {
      state.metrics.rejected += 1;
      return Err(TryEnqueueError::Shutdown(item));
    }
    state.ring.push_back(item).map_err(TryEnqueueError::Full)?;
    state.metrics.enqueued += 1;
    self.not_empty.notify_one();
    Ok(())
  }

  /// Removes and returns the oldest element, blocking the current thread
  /// while the queue is empty.
  ///
  /// Returns `None` once the queue is shut down and has no elements left.
  /// Elements queued before shutdown are still handed out in order.
  pub fn dequeue(&self) -> Option<T> {
    let mut state = self.state.lock();
    loop {
      if let Some(item) = state.ring.pop_front() {
        state.metrics.dequeued += 1;
        self.not_full.notify_one();
        return Some(item);
      }
      if state.shutdown {
        return None;
      }
      state.metrics.consumer_waits += 1;
      trace!(queue = self.label(), "consumer waiting for an element");
      self.not_empty.wait(&mut state);
    }
  }

  /// Attempts to remove the oldest element without blocking.
  pub fn try_dequeue(&self) -> Result<T, TryDequeueError> {
    let mut state = self.state.lock();
    match state.ring.pop_front() {
      Some(item) => {
        state.metrics.dequeued += 1;
        self.not_full.notify_one();
        Ok(item)
      }
      None if state.shutdown => Err(TryDequeueError::Shutdown),
      None => Err(TryDequeueError::Empty),
    }
  }

  /// Shuts the queue down and wakes every blocked producer and consumer.
  ///
  /// Blocked and future enqueues are refused. Elements already queued stay
  /// retrievable until the queue is empty, after which dequeues return `None`
  /// immediately. Calling this more than once has no further effect.
  pub fn shutdown(&self) {
    let mut state = self.state.lock();
    if !state.shutdown {
      state.shutdown = true;
      debug!(
        queue = self.label(),
        pending = state.ring.len(),
        "blocking queue shut down"
      );
    }
    // Broadcast before the guard is released so every waiter observes the
    // flag when it reacquires the lock.
    self.not_empty.notify_all();
    self.not_full.notify_all();
  }

  /// Shuts the queue down and releases it, dropping any elements still queued.
  ///
  /// Taking `self` by value means no other thread can still be using the
  /// queue, so no waiter is ever abandoned.
  pub fn destroy(self) {
    self.shutdown();
    trace!(queue = self.label(), "blocking queue destroyed");
  }

  /// Returns `true` if the queue holds no elements at this instant.
  pub fn is_empty(&self) -> bool {
    self.state.lock().ring.is_empty()
  }

  /// Returns `true` once `shutdown` (or `destroy`) has been called.
  pub fn is_shutdown(&self) -> bool {
    self.state.lock().shutdown
  }

  /// Returns `true` if every slot is occupied at this instant.
  pub fn is_full(&self) -> bool {
    self.state.lock().ring.is_full()
  }

  /// Returns the number of elements currently queued.
  pub fn len(&self) -> usize {
    self.state.lock().ring.len()
  }

  /// Returns the fixed number of slots.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the queue's label, if one was configured.
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Returns the current lifecycle phase.
  pub fn state(&self) -> QueueState {
    let state = self.state.lock();
    match (state.shutdown, state.ring.is_empty()) {
      (false, _) => QueueState::Active,
      (true, false) => QueueState::Draining,
      (true, true) => QueueState::ShutdownEmpty,
    }
  }

  /// Returns a snapshot of the queue's counters.
  pub fn metrics(&self) -> MetricsSnapshot {
    let state = self.state.lock();
    state.metrics.snapshot(state.ring.len(), state.ring.capacity())
  }

  fn label(&self) -> &str {
    self.name.as_deref().unwrap_or("<unnamed>")
  }
}

impl<T> Drop for BlockingQueue<T> {
  fn drop(&mut self) {
    let remaining = self.state.get_mut().ring.len();
    trace!(queue = self.label(), remaining, "blocking queue dropped");
  }
}

impl<T> fmt::Debug for BlockingQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.state.lock();
    f.debug_struct("BlockingQueue")
      .field("name", &self.name)
      .field("capacity", &self.capacity)
      .field("len", &state.ring.len())
      .field("shutdown", &state.shutdown)
      .finish_non_exhaustive()
  }
}
