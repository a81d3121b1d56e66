//! Fixed-capacity circular buffer backing [`BoundedQueue`](crate::BoundedQueue).
//!
//! The ring is not synchronized on its own; the queue only touches it while
//! holding its mutex.
//!
//! ```text
//! ┌───┬───┬───┬───┬───┐
//! │   │ A │ B │ C │   │   count = 3
//! └───┴───┴───┴───┴───┘
//!       ▲           ▲
//!      head        tail
//! ```
//!
//! Items live in `[head, head + count)` modulo capacity. Capacity is exact
//! rather than rounded to a power of two, so indices wrap with a compare
//! instead of a mask.

use std::collections::TryReserveError;

pub(crate) struct Ring<T> {
    slots: Box<[Option<T>]>,
    /// Next slot to read.
    head: usize,
    /// Next slot to write.
    tail: usize,
    count: usize,

    // Parked-waiter counts. Maintained by the queue around condvar waits so
    // it only notifies when someone is actually asleep; the ring never reads
    // them.
    pub(crate) parked_enqueuers: usize,
    pub(crate) parked_dequeuers: usize,
}

impl<T> Ring<T> {
    /// Allocates a ring with exactly `capacity` empty slots.
    ///
    /// Allocation failure is reported rather than aborting. `capacity` must be
    /// non-zero; the queue checks this before calling.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        debug_assert!(capacity > 0);

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
            parked_enqueuers: 0,
            parked_dequeuers: 0,
        })
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Writes `item` at the tail. Hands it back if the ring is full.
    pub(crate) fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }

        debug_assert!(self.slots[self.tail].is_none());
        self.slots[self.tail] = Some(item);
        self.tail = self.wrap(self.tail + 1);
        self.count += 1;
        Ok(())
    }

    /// Takes the item at the head, if any.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.slots[self.head].take();
        debug_assert!(item.is_some());
        self.head = self.wrap(self.head + 1);
        self.count -= 1;
        item
    }

    #[inline(always)]
    fn wrap(&self, index: usize) -> usize {
        if index == self.slots.len() { 0 } else { index }
    }
}
