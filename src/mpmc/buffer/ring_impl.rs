use std::sync::atomic::{AtomicBool, Ordering::Relaxed};

use crossbeam_utils::CachePadded;

use super::layout::Snapshot;
use super::ring::{Cursors, RingBuffer, Slot};
use crate::logger::{NoopLogger, RingLogger};

/// Smallest permitted slot count. One slot is sacrificed to disambiguate
/// full from empty, so anything below two could never hold an item.
pub(crate) const MIN_CAPACITY: u32 = 2;

impl<T> RingBuffer<T> {
    /// Creates a ring with the requested capacity and defaults for
    /// everything else (debug off, no-op logger).
    ///
    /// `capacity` is rounded up to the next power of two, minimum 2; the
    /// usable capacity is one less than [`cap`].
    ///
    /// [`cap`]: RingBuffer::cap
    pub fn with_capacity(capacity: u32) -> Self {
        Self::with_options(capacity, false, Box::new(NoopLogger))
    }

    pub(crate) fn with_options(
        capacity: u32,
        debug_mode: bool,
        logger: Box<dyn RingLogger>,
    ) -> Self {
        let cap = capacity.max(MIN_CAPACITY).next_power_of_two();
        let mut data = Vec::with_capacity(cap as usize);
        for _ in 0..cap {
            data.push(CachePadded::new(Slot::new()));
        }

        Self {
            cap,
            cap_mask: cap - 1,
            cursors: CachePadded::new(Cursors::new()),
            data: data.into_boxed_slice(),
            debug_mode: AtomicBool::new(debug_mode),
            logger,
        }
    }

    /// The outer capacity of the ring: the rounded power of two. The ring
    /// holds at most `cap() - 1` items at a time.
    #[inline]
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Number of items currently visible in the ring, computed from one
    /// cursor snapshot. Stale the instant it returns.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.qty_at(self.snapshot())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        let snap = self.snapshot();
        snap.head == snap.tail
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        let snap = self.snapshot();
        (snap.tail.wrapping_add(1) & self.cap_mask) == snap.head
    }

    /// Toggles trace events on enqueue/dequeue; returns the previous state.
    pub fn set_debug(&self, enabled: bool) -> bool {
        self.debug_mode.swap(enabled, Relaxed)
    }

    /// Producer retries recorded so far. Diagnostic only.
    pub fn put_waits(&self) -> u64 {
        self.cursors.put_waits.load(Relaxed)
    }

    /// Consumer retries recorded so far. Diagnostic only.
    pub fn get_waits(&self) -> u64 {
        self.cursors.get_waits.load(Relaxed)
    }

    /// Zeroes both wait counters.
    pub fn reset_counters(&self) {
        self.cursors.put_waits.store(0, Relaxed);
        self.cursors.get_waits.store(0, Relaxed);
    }

    /// Releases the logger. Storage is reclaimed when the buffer drops;
    /// callers are responsible for draining first.
    pub fn close(&self) {
        self.logger.close();
    }

    #[inline]
    pub(crate) fn snapshot(&self) -> Snapshot {
        self.cursors.pair.snapshot()
    }

    #[inline]
    pub(crate) fn qty_at(&self, snap: Snapshot) -> u32 {
        snap.tail.wrapping_sub(snap.head) & self.cap_mask
    }

    #[inline]
    pub(crate) fn debug_enabled(&self) -> bool {
        self.debug_mode.load(Relaxed)
    }
}
