// src/error.rs

use core::fmt;
use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur when building a queue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
  /// The queue was configured with a capacity of zero. A bounded blocking
  /// queue needs at least one slot.
  #[error("queue capacity must be greater than zero")]
  ZeroCapacity,
  /// The backing storage for `capacity` slots could not be reserved.
  #[error("failed to allocate storage for {capacity} queue slots")]
  Allocation {
    capacity: usize,
    #[source]
    source: TryReserveError,
  },
}

// Implements `into_inner`, `Display` and `Error` for enums whose variants all
// hand the rejected element back to the caller.
macro_rules! impl_error_for_enum_with_inner {
  (
    $enum_name:ident < $generic_param:ident >,
    $($variant:ident ( $message:expr ) ),+
    $(,)?
  ) => {
    impl<$generic_param> $enum_name<$generic_param> {
      /// Consumes the error, returning the element that was not enqueued.
      #[inline]
      pub fn into_inner(self) -> $generic_param {
        match self {
          $( $enum_name::$variant(v) => v, )+
        }
      }
    }

    impl<$generic_param> fmt::Display for $enum_name<$generic_param> {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
          $( $enum_name::$variant(_) => f.write_str($message), )+
        }
      }
    }

    impl<$generic_param: fmt::Debug> std::error::Error for $enum_name<$generic_param> {}
  };
}

/// Error returned by the blocking `enqueue` when the queue is shut down,
/// either before the call or while it was waiting for a free slot.
///
/// The element was not inserted and is returned to the caller.
#[derive(PartialEq, Eq, Clone)]
pub enum EnqueueError<T> {
  Shutdown(T),
}

impl<T> fmt::Debug for EnqueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EnqueueError::Shutdown(_) => write!(f, "EnqueueError::Shutdown(..)"),
    }
  }
}

impl_error_for_enum_with_inner!(EnqueueError<T>, Shutdown("queue shut down"));

/// Error returned by `try_enqueue` when the element could not be inserted
/// immediately. The element is returned.
#[derive(PartialEq, Eq, Clone)]
pub enum TryEnqueueError<T> {
  /// Every slot is occupied.
  Full(T),
  /// The queue has been shut down and refuses new elements.
  Shutdown(T),
}

impl<T> fmt::Debug for TryEnqueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TryEnqueueError::Full(_) => write!(f, "TryEnqueueError::Full(..)"),
      TryEnqueueError::Shutdown(_) => write!(f, "TryEnqueueError::Shutdown(..)"),
    }
  }
}

impl_error_for_enum_with_inner!(
  TryEnqueueError<T>,
  Full("queue full"),
  Shutdown("queue shut down"),
);

impl<T> From<EnqueueError<T>> for TryEnqueueError<T> {
  fn from(err: EnqueueError<T>) -> Self {
    match err {
      EnqueueError::Shutdown(v) => TryEnqueueError::Shutdown(v),
    }
  }
}

/// Error returned by `try_dequeue` when no element could be taken immediately.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TryDequeueError {
  /// The queue is empty but still accepting elements.
  Empty,
  /// The queue is empty and shut down; no element will ever arrive.
  Shutdown,
}

impl std::error::Error for TryDequeueError {}

impl fmt::Display for TryDequeueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TryDequeueError::Empty => write!(f, "queue empty"),
      TryDequeueError::Shutdown => write!(f, "queue empty and shut down"),
    }
  }
}
