#![allow(dead_code)]

use std::thread::JoinHandle;
use std::time::{Duration, Instant};

pub const SHORT_TIMEOUT: Duration = Duration::from_millis(100);
pub const LONG_TIMEOUT: Duration = Duration::from_secs(3);
pub const STRESS_TIMEOUT: Duration = Duration::from_secs(15);
pub const ITEMS_LOW: usize = 50;
pub const ITEMS_MEDIUM: usize = 200;
pub const ITEMS_HIGH: usize = 1000;

/// Joins `handle`, failing the test if the thread has not finished within `timeout`.
pub fn join_within<T>(handle: JoinHandle<T>, timeout: Duration) -> T {
  let deadline = Instant::now() + timeout;
  while !handle.is_finished() {
    assert!(
      Instant::now() < deadline,
      "thread did not finish within {:?}",
      timeout
    );
    std::thread::sleep(Duration::from_millis(1));
  }
  handle.join().expect("thread panicked")
}
