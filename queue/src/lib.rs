//! A fixed-capacity, thread-safe blocking FIFO queue with cooperative shutdown.
//!
//! `fibre_queue` provides [`BlockingQueue`], a monitor-style bounded queue: one
//! `parking_lot::Mutex` guards the ring buffer and shutdown flag, and two
//! condition variables park producers while the queue is full and consumers
//! while it is empty.
//!
//! Calling [`BlockingQueue::shutdown`] is a one-way broadcast. Every blocked
//! call returns promptly, further enqueues are refused, and elements already
//! queued can still be drained in FIFO order before `dequeue` starts returning
//! `None`.

mod builder;
pub mod error;
mod metrics;
mod queue;
mod ring;


pub use builder::{QueueBuilder, QueueConfig};
pub use error::{BuildError, EnqueueError, TryDequeueError, TryEnqueueError};
pub use metrics::MetricsSnapshot;
pub use queue::{BlockingQueue, QueueState};
