use std::fmt;

use crate::mpmc::buffer::RingBuffer;

/// Debug helper for [`RingBuffer`].
///
/// Shows a cursor snapshot and the diagnostic counters, never payloads:
/// slot contents are owned by whichever thread holds the in-progress
/// state and cannot be read safely from here.
pub fn debug_ring_buffer<T>(rb: &RingBuffer<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let snap = rb.snapshot();
    f.debug_struct("RingBuffer")
        .field("cap", &rb.cap())
        .field("quantity", &rb.quantity())
        .field("head", &snap.head)
        .field("tail", &snap.tail)
        .field("put_waits", &rb.put_waits())
        .field("get_waits", &rb.get_waits())
        .field("debug_mode", &rb.debug_enabled())
        .finish_non_exhaustive()
}

impl<T> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_ring_buffer(self, f)
    }
}
