//! A bounded MPMC blocking queue with a drain-then-close shutdown protocol.
//!
//! [`BoundedQueue`] is a fixed-capacity FIFO shared between any number of
//! producer and consumer threads. Producers block while the queue is full,
//! consumers block while it is empty, and [`shutdown`](BoundedQueue::shutdown)
//! releases every blocked thread at once.
//!
//! # Example
//!
//! ```
//! use nexus_blocking_queue::BoundedQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(BoundedQueue::<u64>::new(16).unwrap());
//!
//! let consumer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || queue.iter().sum::<u64>())
//! };
//!
//! for i in 0..100 {
//!     queue.enqueue(i); // blocks while full
//! }
//! queue.shutdown(); // consumer drains what is left, then stops
//!
//! assert_eq!(consumer.join().unwrap(), 99 * 100 / 2);
//! ```
//!
//! # Shutdown
//!
//! Shutdown is a one-way transition. Afterwards:
//!
//! - [`enqueue`](BoundedQueue::enqueue) drops its item silently, including
//!   producers that were blocked on a full queue when shutdown happened.
//! - [`dequeue`](BoundedQueue::dequeue) keeps returning resident items until
//!   the queue is drained, then returns `None` from then on.
//!
//! ```
//! use nexus_blocking_queue::BoundedQueue;
//!
//! let queue = BoundedQueue::new(10).unwrap();
//! queue.enqueue('A');
//! queue.enqueue('B');
//! queue.enqueue('C');
//!
//! assert_eq!(queue.dequeue(), Some('A'));
//! assert_eq!(queue.dequeue(), Some('B'));
//!
//! queue.shutdown();
//! queue.enqueue('D'); // dropped
//!
//! assert_eq!(queue.dequeue(), Some('C'));
//! assert_eq!(queue.dequeue(), None);
//! assert!(queue.is_empty());
//! assert!(queue.is_shutdown());
//! ```
//!
//! `enqueue` gives no signal that an item was dropped. Use
//! [`try_enqueue`](BoundedQueue::try_enqueue) when the caller needs to know.
//!
//! # Non-blocking Operations
//!
//! ```
//! use nexus_blocking_queue::{BoundedQueue, TryDequeueError, TryEnqueueError};
//!
//! let queue = BoundedQueue::new(2).unwrap();
//!
//! queue.try_enqueue(1).unwrap();
//! queue.try_enqueue(2).unwrap();
//! assert!(matches!(queue.try_enqueue(3), Err(TryEnqueueError::Full(3))));
//!
//! assert_eq!(queue.try_dequeue().unwrap(), 1);
//! assert_eq!(queue.try_dequeue().unwrap(), 2);
//! assert!(matches!(queue.try_dequeue(), Err(TryDequeueError::Empty)));
//!
//! queue.shutdown();
//! assert!(matches!(queue.try_enqueue(4), Err(TryEnqueueError::Shutdown(4))));
//! assert!(matches!(queue.try_dequeue(), Err(TryDequeueError::Shutdown)));
//! ```
//!
//! # Waiting Strategy
//!
//! Blocking operations go through three phases before sleeping:
//!
//! ```text
//! Phase 1: Fast path
//! └── Lock, try the operation, unlock
//!
//! Phase 2: Backoff (spin + yield)
//! ├── crossbeam's Backoff::snooze(), lock NOT held
//! ├── Retry the operation after each snooze
//! └── Configurable iterations (default: 8)
//!
//! Phase 3: Park
//! ├── Wait on the "not full" / "not empty" condvar
//! └── Re-check shutdown and the predicate after every wake
//! ```
//!
//! The wake side mirrors this: the ring counts parked enqueuers and
//! dequeuers, and a push or pop only notifies a condvar when the matching
//! count is non-zero. Only syscall when a waiter is ACTUALLY sleeping.
//!
//! A short burst of contention usually resolves in phase 2, so neither side
//! touches the futex. Tune it with
//! [`with_config`](BoundedQueue::with_config):
//!
//! ```
//! use nexus_blocking_queue::BoundedQueue;
//!
//! // Park straight away (lowest CPU use)
//! let queue = BoundedQueue::<u64>::with_config(1024, 0).unwrap();
//!
//! // Spin longer before parking (lower latency under bursty load)
//! let queue = BoundedQueue::<u64>::with_config(1024, 32).unwrap();
//! ```
//!
//! # Synchronization
//!
//! One mutex guards the ring buffer. The shutdown flag and a copy of the item
//! count live in cache-padded atomics next to it:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Mutex<Ring<T>>   buffer, head, tail, count,             │
//! │                  parked_enqueuers, parked_dequeuers     │
//! │ Condvar          not_empty (dequeuers wait here)        │
//! │ Condvar          not_full  (enqueuers wait here)        │
//! ├─────────────────────────────────────────────────────────┤
//! │ shutdown: AtomicBool (padded)  written under the lock   │
//! ├─────────────────────────────────────────────────────────┤
//! │ len: AtomicUsize (padded)      written under the lock   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Both atomics are only written while the lock is held, so a waiter that
//! checks the flag under the lock and then parks cannot miss the shutdown
//! broadcast. Outside the lock they serve the snapshot queries
//! ([`is_empty`](BoundedQueue::is_empty), [`len`](BoundedQueue::len),
//! [`is_shutdown`](BoundedQueue::is_shutdown)), which may be stale by the time
//! the caller looks at them.
//!
//! # Tracing
//!
//! With the `tracing` feature the queue emits `debug` events on creation and
//! shutdown and `trace` events when a caller parks or an item is dropped. Call
//! [`init_tracing`] to install a subscriber.

use core::fmt;
use std::collections::TryReserveError;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crossbeam_utils::{Backoff, CachePadded};

mod ring;
mod trace;

use ring::Ring;
use trace::{debug, trace};

pub use trace::init_tracing;

/// Default number of backoff snooze iterations before parking.
///
/// Each snooze uses `crossbeam_utils::Backoff::snooze()` which starts with
/// spinning and eventually yields to the OS scheduler.
pub const DEFAULT_SNOOZE_ITERS: usize = 8;

/// A fixed-capacity FIFO queue for multiple producers and consumers.
///
/// All operations take `&self`; share the queue between threads with an
/// [`Arc`](std::sync::Arc). Items are moved in by
/// [`enqueue`](Self::enqueue) and moved back out by [`dequeue`](Self::dequeue).
///
/// The k-th accepted enqueue supplies the item for the k-th successful
/// dequeue. No ordering is promised between producers racing each other.
///
/// # Destroying
///
/// Dropping the queue drops any items still resident. Because every
/// operation borrows the queue, it cannot be dropped while a thread is still
/// blocked inside it; shut down and join the workers first.
///
/// # Example
///
/// ```
/// use nexus_blocking_queue::BoundedQueue;
///
/// let queue = BoundedQueue::new(4).unwrap();
///
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(queue.dequeue(), Some("b"));
/// ```
pub struct BoundedQueue<T> {
    ring: Mutex<Ring<T>>,
    not_empty: Condvar,
    not_full: Condvar,
    shutdown: CachePadded<AtomicBool>,
    len: CachePadded<AtomicUsize>,
    capacity: usize,
    snooze_iters: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` items.
    ///
    /// Uses default backoff settings (8 snooze iterations before parking).
    /// For custom backoff tuning, use [`with_config`](Self::with_config).
    ///
    /// # Errors
    ///
    /// - [`NewError::ZeroCapacity`] if `capacity` is 0.
    /// - [`NewError::Alloc`] if the buffer cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_blocking_queue::{BoundedQueue, NewError};
    ///
    /// let queue = BoundedQueue::<String>::new(100).unwrap();
    /// assert_eq!(queue.capacity(), 100);
    /// assert!(queue.is_empty());
    /// assert!(!queue.is_shutdown());
    ///
    /// assert!(matches!(BoundedQueue::<String>::new(0), Err(NewError::ZeroCapacity)));
    /// ```
    pub fn new(capacity: usize) -> Result<Self, NewError> {
        Self::with_config(capacity, DEFAULT_SNOOZE_ITERS)
    }

    /// Creates an empty queue with custom backoff configuration.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident items (exact, not rounded)
    /// * `snooze_iters` - Number of backoff iterations before parking. Higher
    ///   values burn more CPU but reduce latency for bursty workloads. Zero
    ///   parks as soon as the fast path fails.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_config(capacity: usize, snooze_iters: usize) -> Result<Self, NewError> {
        if capacity == 0 {
            return Err(NewError::ZeroCapacity);
        }

        let ring = Ring::with_capacity(capacity).map_err(NewError::Alloc)?;

        debug!(capacity, snooze_iters, "queue created");

        Ok(Self {
            ring: Mutex::new(ring),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            shutdown: CachePadded::new(AtomicBool::new(false)),
            len: CachePadded::new(AtomicUsize::new(0)),
            capacity,
            snooze_iters,
        })
    }

    /// Adds an item at the back of the queue, blocking while it is full.
    ///
    /// If the queue is shut down, either before the call or while this call
    /// is blocked, the item is dropped and the call returns. Nothing tells
    /// the caller that happened; use [`try_enqueue`](Self::try_enqueue) to
    /// find out.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_blocking_queue::BoundedQueue;
    /// use std::sync::Arc;
    /// use std::thread;
    ///
    /// let queue = Arc::new(BoundedQueue::new(1).unwrap());
    /// queue.enqueue(1);
    ///
    /// let producer = {
    ///     let queue = Arc::clone(&queue);
    ///     thread::spawn(move || queue.enqueue(2)) // blocks: queue is full
    /// };
    ///
    /// assert_eq!(queue.dequeue(), Some(1)); // frees the slot
    /// producer.join().unwrap();
    /// assert_eq!(queue.dequeue(), Some(2));
    /// ```
    pub fn enqueue(&self, item: T) {
        // Fast path
        let mut item = match self.try_enqueue(item) {
            Ok(()) => return,
            Err(TryEnqueueError::Full(v)) => v,
            Err(TryEnqueueError::Shutdown(_)) => {
                trace!("enqueue after shutdown, item dropped");
                return;
            }
        };

        // Backoff phase
        let backoff = Backoff::new();
        for _ in 0..self.snooze_iters {
            backoff.snooze();

            match self.try_enqueue(item) {
                Ok(()) => return,
                Err(TryEnqueueError::Full(v)) => item = v,
                Err(TryEnqueueError::Shutdown(_)) => {
                    trace!("enqueue after shutdown, item dropped");
                    return;
                }
            }
        }

        // Park phase
        let mut ring = self.lock();
        loop {
            if self.is_shutdown() {
                trace!("blocked enqueue released by shutdown, item dropped");
                return;
            }

            match self.push_locked(&mut ring, item) {
                Ok(()) => return,
                Err(v) => item = v,
            }

            trace!("enqueue parked on full queue");
            ring = self.park_enqueuer(ring);
        }
    }

    /// Attempts to add an item without blocking.
    ///
    /// Returns immediately with:
    /// - `Ok(())` if the item was accepted
    /// - `Err(TryEnqueueError::Full(item))` if the queue is full
    /// - `Err(TryEnqueueError::Shutdown(item))` if the queue is shut down
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_blocking_queue::{BoundedQueue, TryEnqueueError};
    ///
    /// let queue = BoundedQueue::new(1).unwrap();
    ///
    /// assert!(queue.try_enqueue(1).is_ok());
    /// assert!(matches!(queue.try_enqueue(2), Err(TryEnqueueError::Full(2))));
    ///
    /// queue.shutdown();
    /// assert!(matches!(queue.try_enqueue(3), Err(TryEnqueueError::Shutdown(3))));
    /// ```
    pub fn try_enqueue(&self, item: T) -> Result<(), TryEnqueueError<T>> {
        let mut ring = self.lock();

        if self.is_shutdown() {
            return Err(TryEnqueueError::Shutdown(item));
        }

        self.push_locked(&mut ring, item)
            .map_err(TryEnqueueError::Full)
    }

    /// Removes the item at the front of the queue, blocking while it is empty.
    ///
    /// Returns `None` only once the queue is shut down and drained; that is
    /// the end-of-stream signal, not an error. Items enqueued before shutdown
    /// are still returned after it.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_blocking_queue::BoundedQueue;
    /// use std::sync::Arc;
    /// use std::thread;
    ///
    /// let queue = Arc::new(BoundedQueue::<u32>::new(4).unwrap());
    ///
    /// let consumer = {
    ///     let queue = Arc::clone(&queue);
    ///     thread::spawn(move || queue.dequeue()) // blocks: queue is empty
    /// };
    ///
    /// queue.shutdown();
    /// assert_eq!(consumer.join().unwrap(), None);
    /// ```
    pub fn dequeue(&self) -> Option<T> {
        // Fast path
        match self.try_dequeue() {
            Ok(v) => return Some(v),
            Err(TryDequeueError::Shutdown) => return None,
            Err(TryDequeueError::Empty) => {}
        }

        // Backoff phase
        let backoff = Backoff::new();
        for _ in 0..self.snooze_iters {
            backoff.snooze();

            match self.try_dequeue() {
                Ok(v) => return Some(v),
                Err(TryDequeueError::Shutdown) => return None,
                Err(TryDequeueError::Empty) => {}
            }
        }

        // Park phase
        let mut ring = self.lock();
        loop {
            if let Some(v) = self.pop_locked(&mut ring) {
                return Some(v);
            }

            if self.is_shutdown() {
                trace!("dequeue on drained queue after shutdown");
                return None;
            }

            trace!("dequeue parked on empty queue");
            ring = self.park_dequeuer(ring);
        }
    }

    /// Attempts to remove an item without blocking.
    ///
    /// Returns immediately with:
    /// - `Ok(item)` if an item was resident
    /// - `Err(TryDequeueError::Empty)` if the queue is empty but still active
    /// - `Err(TryDequeueError::Shutdown)` if the queue is shut down and drained
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_blocking_queue::{BoundedQueue, TryDequeueError};
    ///
    /// let queue = BoundedQueue::new(4).unwrap();
    /// assert!(matches!(queue.try_dequeue(), Err(TryDequeueError::Empty)));
    ///
    /// queue.enqueue(7);
    /// queue.shutdown();
    ///
    /// assert_eq!(queue.try_dequeue().unwrap(), 7);
    /// assert!(matches!(queue.try_dequeue(), Err(TryDequeueError::Shutdown)));
    /// ```
    pub fn try_dequeue(&self) -> Result<T, TryDequeueError> {
        let mut ring = self.lock();

        match self.pop_locked(&mut ring) {
            Some(v) => Ok(v),
            None if self.is_shutdown() => Err(TryDequeueError::Shutdown),
            None => Err(TryDequeueError::Empty),
        }
    }

    /// Shuts the queue down and wakes every blocked caller.
    ///
    /// Blocked and future enqueues drop their items. Dequeues keep draining
    /// resident items, then return `None`. Calling this more than once has no
    /// further effect.
    pub fn shutdown(&self) {
        let ring = self.lock();

        if self.shutdown.swap(true, Ordering::AcqRel) {
            return;
        }

        debug!(resident = ring.len(), "queue shut down");
        drop(ring);

        // Broadcast: every waiter has to re-check the flag.
        self.not_empty.notify_all();
        self.not_full.notify_all();
    }

    /// Returns an iterator that dequeues until the queue is shut down and
    /// drained.
    ///
    /// Each call to `next` blocks like [`dequeue`](Self::dequeue).
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_blocking_queue::BoundedQueue;
    ///
    /// let queue = BoundedQueue::new(4).unwrap();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// queue.shutdown();
    ///
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { queue: self }
    }

    /// Returns `true` if no items are resident.
    ///
    /// This is a snapshot: another thread may change it immediately after.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the queue holds `capacity` items.
    ///
    /// Same snapshot caveat as [`is_empty`](Self::is_empty).
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Returns `true` once [`shutdown`](Self::shutdown) has been called.
    ///
    /// Never goes back to `false`.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Returns the number of resident items at the time of the call.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Returns the maximum number of resident items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, Ring<T>> {
        // No user code runs under the lock, so a poisoned ring is still consistent.
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleeps on `not_full`, counted in `parked_enqueuers` for the duration.
    ///
    /// The count goes up and the lock is released in one step (the condvar
    /// wait), so a pusher or popper holding the lock either sees this waiter
    /// or runs before it checked its predicate.
    fn park_enqueuer<'a>(&self, mut ring: MutexGuard<'a, Ring<T>>) -> MutexGuard<'a, Ring<T>> {
        ring.parked_enqueuers += 1;
        let mut ring = self
            .not_full
            .wait(ring)
            .unwrap_or_else(PoisonError::into_inner);
        ring.parked_enqueuers -= 1;
        ring
    }

    /// Sleeps on `not_empty`, counted in `parked_dequeuers` for the duration.
    fn park_dequeuer<'a>(&self, mut ring: MutexGuard<'a, Ring<T>>) -> MutexGuard<'a, Ring<T>> {
        ring.parked_dequeuers += 1;
        let mut ring = self
            .not_empty
            .wait(ring)
            .unwrap_or_else(PoisonError::into_inner);
        ring.parked_dequeuers -= 1;
        ring
    }

    /// Pushes and signals. Caller holds the lock and has checked shutdown.
    ///
    /// Only notifies when a waiter is actually parked: with nobody asleep
    /// this is a plain store, no futex wake.
    fn push_locked(&self, ring: &mut Ring<T>, item: T) -> Result<(), T> {
        ring.push(item)?;
        self.len.store(ring.len(), Ordering::Release);

        if ring.parked_dequeuers > 0 {
            self.not_empty.notify_one();
        }
        // Chain the wakeup so a run of parked producers drains into free slots.
        if ring.parked_enqueuers > 0 && !ring.is_full() {
            self.not_full.notify_one();
        }
        Ok(())
    }

    /// Pops and signals. Caller holds the lock.
    fn pop_locked(&self, ring: &mut Ring<T>) -> Option<T> {
        let item = ring.pop()?;
        self.len.store(ring.len(), Ordering::Release);

        if ring.parked_enqueuers > 0 {
            self.not_full.notify_one();
        }
        Some(item)
    }
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("shutdown", &self.is_shutdown())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Iteration
// ============================================================================

/// Blocking iterator over a queue's items, created by [`BoundedQueue::iter`].
///
/// Ends once the queue is shut down and drained. Since a shut-down queue
/// never accepts items again, it stays ended.
pub struct Iter<'a, T> {
    queue: &'a BoundedQueue<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("queue", self.queue).finish()
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when [`BoundedQueue::new`] cannot build a queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewError {
    /// The requested capacity was 0.
    ZeroCapacity,

    /// The ring buffer could not be allocated.
    Alloc(TryReserveError),
}

impl fmt::Display for NewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewError::ZeroCapacity => write!(f, "queue capacity must be greater than zero"),
            NewError::Alloc(_) => write!(f, "failed to allocate queue buffer"),
        }
    }
}

impl std::error::Error for NewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NewError::ZeroCapacity => None,
            NewError::Alloc(e) => Some(e),
        }
    }
}

/// Error returned by [`BoundedQueue::try_enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryEnqueueError<T> {
    /// The queue is full but still active.
    ///
    /// The item is returned so it can be retried or handled.
    Full(T),

    /// The queue has been shut down.
    ///
    /// The item is returned for cleanup.
    Shutdown(T),
}

impl<T> TryEnqueueError<T> {
    /// Returns the item that was not enqueued.
    pub fn into_inner(self) -> T {
        match self {
            TryEnqueueError::Full(v) => v,
            TryEnqueueError::Shutdown(v) => v,
        }
    }

    /// Returns `true` if this error is the `Full` variant.
    pub fn is_full(&self) -> bool {
        matches!(self, TryEnqueueError::Full(_))
    }

    /// Returns `true` if this error is the `Shutdown` variant.
    pub fn is_shutdown(&self) -> bool {
        matches!(self, TryEnqueueError::Shutdown(_))
    }
}

impl<T> fmt::Display for TryEnqueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryEnqueueError::Full(_) => write!(f, "queue full"),
            TryEnqueueError::Shutdown(_) => write!(f, "queue shut down"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for TryEnqueueError<T> {}

/// Error returned by [`BoundedQueue::try_dequeue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryDequeueError {
    /// The queue is empty but still active.
    ///
    /// An item may arrive later.
    Empty,

    /// The queue is shut down and no items remain.
    Shutdown,
}

impl TryDequeueError {
    /// Returns `true` if this error is the `Empty` variant.
    pub fn is_empty(&self) -> bool {
        matches!(self, TryDequeueError::Empty)
    }

    /// Returns `true` if this error is the `Shutdown` variant.
    pub fn is_shutdown(&self) -> bool {
        matches!(self, TryDequeueError::Shutdown)
    }
}

impl fmt::Display for TryDequeueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryDequeueError::Empty => write!(f, "queue empty"),
            TryDequeueError::Shutdown => write!(f, "queue shut down"),
        }
    }
}

impl std::error::Error for TryDequeueError {}
