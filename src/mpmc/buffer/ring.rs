// Shared state of one bounded MPMC ring: the slot array and its cursors.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crossbeam_utils::CachePadded;

use super::layout::{
    IndexPair, SLOT_READABLE, SLOT_READ_IN_PROGRESS, SLOT_WRITABLE, SLOT_WRITE_IN_PROGRESS,
};
use crate::logger::RingLogger;

/// One cell of the ring.
///
/// The `rw` marker is a four-state machine: `Writable` and `Readable` are
/// the quiescent states; `WriteInProgress` and `ReadInProgress` grant the
/// winning thread exclusive access to `value`. Every transition is a single
/// CAS, so a published payload is handed to exactly one consumer.
///
/// `value` holds `None` while the slot is unset; a `Readable` slot must
/// always carry `Some`, and the consumer side treats anything else as a
/// broken ordering chain.
pub struct Slot<T> {
    pub(crate) rw: AtomicU64,
    pub(crate) value: UnsafeCell<Option<T>>,
}

// Safety: access to `value` is serialised by the `rw` state machine; the
// payload only needs to be sendable across threads.
unsafe impl<T: Send> Send for Slot<T> {}
unsafe impl<T: Send> Sync for Slot<T> {}

impl<T> Slot<T> {
    pub(crate) fn new() -> Self {
        Self {
            rw: AtomicU64::new(SLOT_WRITABLE),
            value: UnsafeCell::new(None),
        }
    }

    /// Producer claim: `Writable -> WriteInProgress`.
    #[inline]
    pub(crate) fn claim_write(&self) -> bool {
        self.rw
            .compare_exchange(
                SLOT_WRITABLE,
                SLOT_WRITE_IN_PROGRESS,
                Ordering::AcqRel,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    /// Producer publish: `WriteInProgress -> Readable`. Ordered after the
    /// payload store so a consumer that observes `Readable` sees the value.
    #[inline]
    pub(crate) fn publish(&self) -> bool {
        self.rw
            .compare_exchange(
                SLOT_WRITE_IN_PROGRESS,
                SLOT_READABLE,
                Ordering::Release,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    /// Consumer claim: `Readable -> ReadInProgress`.
    #[inline]
    pub(crate) fn claim_read(&self) -> bool {
        self.rw
            .compare_exchange(
                SLOT_READABLE,
                SLOT_READ_IN_PROGRESS,
                Ordering::AcqRel,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    /// Consumer release: `ReadInProgress -> Writable`.
    #[inline]
    pub(crate) fn release(&self) -> bool {
        self.rw
            .compare_exchange(
                SLOT_READ_IN_PROGRESS,
                SLOT_WRITABLE,
                Ordering::Release,
                Ordering::Relaxed,
            )
            .is_ok()
    }
}

/// The cursor pair and its retry counters, padded as one unit so the hot
/// word never shares a cache line with the slot array.
pub(crate) struct Cursors {
    pub(crate) pair: IndexPair,
    pub(crate) put_waits: AtomicU64,
    pub(crate) get_waits: AtomicU64,
}

impl Cursors {
    pub(crate) const fn new() -> Self {
        Self {
            pair: IndexPair::new(),
            put_waits: AtomicU64::new(0),
            get_waits: AtomicU64::new(0),
        }
    }
}

/// A bounded, lock-free, multi-producer multi-consumer FIFO ring buffer.
///
/// ### Concurrency design
/// - **Producers** snapshot the cursor pair, claim the tail slot with a CAS
///   on its marker, store the payload, advance the tail, then publish the
///   slot. The claim CAS is the linearization point of an enqueue.
/// - **Consumers** run the mirror-image sequence over the head slot.
/// - **Cache-line padding**: the cursor group and every slot are wrapped in
///   `CachePadded` so independent atomics never share a line.
///
/// No operation blocks. Contention surfaces as a spin hint plus an
/// incremented wait counter, and `Full`/`Empty` results are handed back to
/// the caller, which owns the retry/back-off policy.
///
/// The slot count is a power of two and one slot is sacrificed to tell a
/// full ring from an empty one, so a ring of capacity `n` stores at most
/// `n - 1` items.
pub struct RingBuffer<T> {
    pub(crate) cap: u32,
    pub(crate) cap_mask: u32,
    pub(crate) cursors: CachePadded<Cursors>,
    pub(crate) data: Box<[CachePadded<Slot<T>>]>,
    pub(crate) debug_mode: AtomicBool,
    pub(crate) logger: Box<dyn RingLogger>,
}

// Safety: the slot state machine plus the atomic cursor pair serialise all
// access to the interior cells.
unsafe impl<T: Send> Send for RingBuffer<T> {}
unsafe impl<T: Send> Sync for RingBuffer<T> {}
