use std::sync::atomic::{AtomicU64, Ordering};

/// Slot marker: empty, available to a producer.
pub(crate) const SLOT_WRITABLE: u64 = 0;
/// Slot marker: full, available to a consumer.
pub(crate) const SLOT_READABLE: u64 = 1;
/// Slot marker: claimed by a producer, payload not yet published.
pub(crate) const SLOT_WRITE_IN_PROGRESS: u64 = 2;
/// Slot marker: claimed by a consumer, payload not yet released.
pub(crate) const SLOT_READ_IN_PROGRESS: u64 = 3;

const HEAD_MASK: u64 = 0xffff_ffff;

/// A mutually consistent view of both cursors, taken with one atomic load.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Snapshot {
    pub head: u32,
    pub tail: u32,
}

/// The packed cursor pair for one ring.
///
/// `head` lives in the low 32 bits and `tail` in the high 32 bits of a
/// single 64-bit word, so one acquire load observes both cursors at a
/// common instant. Each cursor advances through a CAS that replaces only
/// its own half:
/// - the CAS reports failure exactly when the caller's half has already
///   moved past the snapshot value, and it is never retried after that;
/// - movement of the *other* half alone re-reads and retries, since it
///   does not invalidate the caller's claim.
///
/// Cursor values are always reduced modulo the ring capacity before they
/// are stored, so both halves stay within `[0, capacity)`.
pub(crate) struct IndexPair {
    quad: AtomicU64,
}

impl IndexPair {
    pub(crate) const fn new() -> Self {
        Self {
            quad: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn snapshot(&self) -> Snapshot {
        let quad = self.quad.load(Ordering::Acquire);
        Snapshot {
            head: quad as u32,
            tail: (quad >> 32) as u32,
        }
    }

    /// Moves `tail` from `snap.tail` to `next_tail`, keeping whatever head
    /// value is current. Returns false once the tail half no longer matches
    /// the snapshot.
    #[inline]
    pub(crate) fn advance_tail(&self, snap: Snapshot, next_tail: u32) -> bool {
        let mut current = pack(snap.head, snap.tail);
        loop {
            let desired = (current & HEAD_MASK) | (u64::from(next_tail) << 32);
            match self
                .quad
                .compare_exchange_weak(current, desired, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return true,
                Err(observed) => {
                    if (observed >> 32) as u32 != snap.tail {
                        return false;
                    }
                    current = observed;
                }
            }
        }
    }

    /// Moves `head` from `snap.head` to `next_head`, keeping whatever tail
    /// value is current. Returns false once the head half no longer matches
    /// the snapshot.
    #[inline]
    pub(crate) fn advance_head(&self, snap: Snapshot, next_head: u32) -> bool {
        let mut current = pack(snap.head, snap.tail);
        loop {
            let desired = (current & !HEAD_MASK) | u64::from(next_head);
            match self
                .quad
                .compare_exchange_weak(current, desired, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return true,
                Err(observed) => {
                    if observed as u32 != snap.head {
                        return false;
                    }
                    current = observed;
                }
            }
        }
    }
}

#[inline]
fn pack(head: u32, tail: u32) -> u64 {
    u64::from(head) | (u64::from(tail) << 32)
}
