use std::fmt;

/// Counters for a queue. They live inside the queue's locked state, so they
/// are plain integers updated in the same critical section as the buffer.
#[derive(Debug, Default, Clone)]
pub(crate) struct Metrics {
  pub(crate) enqueued: u64,
  pub(crate) dequeued: u64,
  pub(crate) rejected: u64,
  pub(crate) producer_waits: u64,
  pub(crate) consumer_waits: u64,
}

impl Metrics {
  pub(crate) fn snapshot(&self, len: usize, capacity: usize) -> MetricsSnapshot {
    MetricsSnapshot {
      enqueued: self.enqueued,
      dequeued: self.dequeued,
      rejected: self.rejected,
      producer_waits: self.producer_waits,
      consumer_waits: self.consumer_waits,
      len,
      capacity,
    }
  }
}

/// A point-in-time view of a queue's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
  /// Elements successfully inserted.
  pub enqueued: u64,
  /// Elements handed out to consumers.
  pub dequeued: u64,
  /// Enqueue attempts refused because the queue was shut down.
  pub rejected: u64,
  /// Times a producer suspended waiting for a free slot.
  pub producer_waits: u64,
  /// Times a consumer suspended waiting for an element.
  pub consumer_waits: u64,
  /// Elements held when the snapshot was taken.
  pub len: usize,
  /// Fixed number of slots.
  pub capacity: usize,
}

impl fmt::Display for MetricsSnapshot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "--- Queue Metrics ---")?;
    writeln!(f, "Occupancy: {} / {}", self.len, self.capacity)?;
    writeln!(f, "Enqueued: {}", self.enqueued)?;
    writeln!(f, "Dequeued: {}", self.dequeued)?;
    writeln!(f, "Rejected (shutdown): {}", self.rejected)?;
    writeln!(f, "Producer Waits: {}", self.producer_waits)?;
    write!(f, "Consumer Waits: {}", self.consumer_waits)
  }
}
