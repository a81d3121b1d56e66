//! Shutdown behavior under many producers and consumers, through the public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use nexus_blocking_queue::{BoundedQueue, TryEnqueueError};

/// Runs `f` on a helper thread and fails if it does not finish in time.
fn within<R: Send + 'static>(limit: Duration, f: impl FnOnce() -> R + Send + 'static) -> R {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || {
        let _ = tx.send(f());
    });

    match rx.recv_timeout(limit) {
        Ok(result) => {
            handle.join().unwrap();
            result
        }
        // The closure panicked; surface its message.
        Err(RecvTimeoutError::Disconnected) => match handle.join() {
            Err(panic) => std::panic::resume_unwind(panic),
            Ok(()) => unreachable!("sender dropped without sending"),
        },
        Err(RecvTimeoutError::Timeout) => {
            panic!("did not finish within {limit:?} - possible deadlock")
        }
    }
}

// =============================================================================
// Shutdown while busy
// =============================================================================

#[test]
fn shutdown_mid_stream_releases_everyone() {
    nexus_blocking_queue::init_tracing();

    let accepted = within(Duration::from_secs(10), || {
        let q = Arc::new(BoundedQueue::<u64>::new(8).unwrap());
        let accepted = Arc::new(AtomicU64::new(0));

        let producers: Vec<_> = (0..4)
            .map(|_| {
                let q = Arc::clone(&q);
                let accepted = Arc::clone(&accepted);
                thread::spawn(move || {
                    let mut i = 0u64;
                    loop {
                        match q.try_enqueue(i) {
                            Ok(()) => {
                                accepted.fetch_add(1, Ordering::Relaxed);
                                i += 1;
                            }
                            Err(TryEnqueueError::Full(_)) => thread::yield_now(),
                            Err(TryEnqueueError::Shutdown(_)) => break,
                        }
                    }
                })
            })
            .collect();

        let consumers: Vec<_> = (0..3)
            .map(|_| {
                let q = Arc::clone(&q);
                thread::spawn(move || q.iter().count() as u64)
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        q.shutdown();

        for p in producers {
            p.join().unwrap();
        }
        let received: u64 = consumers.into_iter().map(|c| c.join().unwrap()).sum();

        assert!(q.is_empty());
        assert_eq!(received, accepted.load(Ordering::Relaxed));
        received
    });

    assert!(accepted > 0);
}

#[test]
fn blocked_producers_and_consumers_on_separate_queues() {
    within(Duration::from_secs(5), || {
        let full = Arc::new(BoundedQueue::<u32>::new(2).unwrap());
        let empty = Arc::new(BoundedQueue::<u32>::new(2).unwrap());
        full.enqueue(1);
        full.enqueue(2);

        let mut handles = Vec::new();
        for i in 0..3 {
            let full = Arc::clone(&full);
            handles.push(thread::spawn(move || {
                full.enqueue(100 + i);
                None
            }));
            let empty = Arc::clone(&empty);
            handles.push(thread::spawn(move || empty.dequeue()));
        }

        thread::sleep(Duration::from_millis(50));
        assert!(handles.iter().all(|h| !h.is_finished()));

        full.shutdown();
        empty.shutdown();

        for h in handles {
            assert_eq!(h.join().unwrap(), None);
        }

        // Resident items survive; the blocked producers' items do not.
        assert_eq!(full.iter().collect::<Vec<_>>(), vec![1, 2]);
    });
}

#[test]
fn shutdown_races_with_parking() {
    // Shutdown right as callers are about to park; none may be left behind.
    within(Duration::from_secs(10), || {
        for _ in 0..200 {
            let q = Arc::new(BoundedQueue::<u8>::with_config(1, 0).unwrap());
            let go = Arc::new(AtomicBool::new(false));

            let waiters: Vec<_> = (0..4)
                .map(|_| {
                    let q = Arc::clone(&q);
                    let go = Arc::clone(&go);
                    thread::spawn(move || {
                        while !go.load(Ordering::Acquire) {
                            std::hint::spin_loop();
                        }
                        q.dequeue()
                    })
                })
                .collect();

            go.store(true, Ordering::Release);
            q.shutdown();

            for w in waiters {
                assert_eq!(w.join().unwrap(), None);
            }
        }
    });
}

// =============================================================================
// Enqueue after shutdown
// =============================================================================

#[test]
fn late_enqueues_leave_count_unchanged() {
    let q = BoundedQueue::new(4).unwrap();
    q.enqueue("kept");
    q.shutdown();

    for _ in 0..10 {
        q.enqueue("late");
    }

    assert_eq!(q.len(), 1);
    assert!(!q.is_empty());
    assert_eq!(q.dequeue(), Some("kept"));
    assert_eq!(q.dequeue(), None);
    assert!(q.is_empty());
}

#[test]
fn worker_pool_drains_backlog_after_shutdown() {
    let q = Arc::new(BoundedQueue::<u64>::new(64).unwrap());
    for i in 1..=64 {
        q.enqueue(i);
    }
    q.shutdown();

    let total = within(Duration::from_secs(5), move || {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let q = Arc::clone(&q);
                thread::spawn(move || q.iter().sum::<u64>())
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).sum::<u64>()
    });

    assert_eq!(total, 64 * 65 / 2);
}
