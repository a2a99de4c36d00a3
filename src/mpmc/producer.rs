// src/mpmc/producer.rs

use std::hint;
use std::sync::atomic::Ordering::Relaxed;

use super::buffer::RingBuffer;
use super::error::EnqueueError;

impl<T> RingBuffer<T> {
    /// Appends `item` at the tail of the ring.
    ///
    /// Non-blocking: when no writable slot is visible the payload is handed
    /// back in [`EnqueueError::Full`] and the caller owns back-off and
    /// retry. A lost claim against a competing producer is retried
    /// internally after a spin hint, bumping the `put_waits` counter.
    ///
    /// # Returns
    /// * `Ok(())` once the slot is published
    /// * `Err(EnqueueError::Full(item))` if the ring is full
    /// * `Err(EnqueueError::Raced)` if the publish transition observed an
    ///   unexpected slot state, which indicates a violated invariant
    pub fn enqueue(&self, item: T) -> Result<(), EnqueueError<T>> {
        loop {
            let snap = self.snapshot();
            let next_tail = snap.tail.wrapping_add(1) & self.cap_mask;
            if next_tail == snap.head {
                return Err(EnqueueError::Full(item));
            }

            let slot = &self.data[snap.tail as usize];
            if slot.claim_write() {
                // The claim CAS serialises ownership of the tail slot.
                unsafe { *slot.value.get() = Some(item) };

                // Publish the new tail. A lost advance is tolerated: the
                // next producer re-reads the pair and re-syncs at its own
                // claim CAS. Never retried past a moved tail.
                self.cursors.pair.advance_tail(snap, next_tail);

                if !slot.publish() {
                    return Err(EnqueueError::Raced);
                }

                if self.debug_enabled() {
                    self.logger.debug(
                        "ring enqueue",
                        &[
                            ("cap", u64::from(self.cap)),
                            ("qty", u64::from(self.qty_at(snap))),
                            ("head", u64::from(snap.head)),
                            ("tail", u64::from(snap.tail)),
                            ("next_tail", u64::from(next_tail)),
                        ],
                    );
                }
                return Ok(());
            }

            hint::spin_loop();
            self.cursors.put_waits.fetch_add(1, Relaxed);
        }
    }
}
