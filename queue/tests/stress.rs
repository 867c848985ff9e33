#[test]
#[cfg(not(debug_assertions))]
fn queue_tsan_stress_test() {
  // Run with RUSTFLAGS="-Z sanitizer=thread" cargo +nightly test --release queue_tsan_stress_test
  use fibre_queue::BlockingQueue;
  use std::sync::Arc;

  let queue = Arc::new(BlockingQueue::new(64).unwrap());
  let num_threads = 8;
  let items_per_thread = 200_000;
  let mut handles = vec![];

  for i in 0..num_threads {
    let queue = queue.clone();
    handles.push(std::thread::spawn(move || {
      for j in 0..items_per_thread {
        queue.enqueue((i, j)).unwrap();
        // A yield can help expose more interleavings.
        if j % 10 == 0 {
          std::thread::yield_now();
        }
      }
    }));
  }

  let consumer = {
    let queue = queue.clone();
    std::thread::spawn(move || {
      let mut count = 0;
      while queue.dequeue().is_some() {
        count += 1;
        if count % 10 == 0 {
          std::thread::yield_now();
        }
      }
      count
    })
  };

  for handle in handles {
    handle.join().unwrap();
  }
  queue.shutdown();

  assert_eq!(consumer.join().unwrap(), num_threads * items_per_thread);
}
