// src/mpmc/consumer.rs

use std::hint;
use std::sync::atomic::Ordering::Relaxed;

use super::buffer::RingBuffer;
use super::error::DequeueError;

impl<T> RingBuffer<T> {
    /// Removes and returns the item at the head of the ring.
    ///
    /// Non-blocking: an empty ring reports [`DequeueError::Empty`] and the
    /// caller owns back-off and retry. A lost claim against a competing
    /// consumer is retried internally after a spin hint, bumping the
    /// `get_waits` counter.
    ///
    /// A `Readable` slot must carry a payload: the producer's store is
    /// ordered before its publish CAS. Finding the slot unset means the
    /// ordering chain is broken, and the logger's fatal channel is invoked
    /// after a structured warning.
    ///
    /// # Returns
    /// * `Ok(item)` once the slot is released back to producers
    /// * `Err(DequeueError::Empty)` if the ring is empty
    /// * `Err(DequeueError::Raced)` if the release transition observed an
    ///   unexpected slot state, which indicates a violated invariant
    pub fn dequeue(&self) -> Result<T, DequeueError> {
        loop {
            let snap = self.snapshot();
            if snap.head == snap.tail {
                return Err(DequeueError::Empty);
            }

            let slot = &self.data[snap.head as usize];
            if slot.claim_read() {
                // The claim CAS serialises ownership of the head slot.
                let taken = unsafe { (*slot.value.get()).take() };
                let next_head = snap.head.wrapping_add(1) & self.cap_mask;

                // Publish the new head; same tolerance as the tail advance.
                self.cursors.pair.advance_head(snap, next_head);

                if !slot.release() {
                    return Err(DequeueError::Raced);
                }

                let fields = [
                    ("cap", u64::from(self.cap)),
                    ("qty", u64::from(self.qty_at(snap))),
                    ("head", u64::from(snap.head)),
                    ("tail", u64::from(snap.tail)),
                    ("next_head", u64::from(next_head)),
                ];

                if self.debug_enabled() {
                    self.logger.debug("ring dequeue", &fields);
                }

                return match taken {
                    Some(item) => Ok(item),
                    None => {
                        if !self.debug_enabled() {
                            self.logger.warn("readable slot held no value", &fields);
                        }
                        self.logger.fatal("readable slot held no value", &fields)
                    }
                };
            }

            hint::spin_loop();
            self.cursors.get_waits.fetch_add(1, Relaxed);
        }
    }
}
