//! Bounded, lock-free, multi-producer / multi-consumer ring buffer.
//!
//! FIFO hand-off of values between threads with no per-operation heap
//! allocation and no blocking: producers and consumers coordinate through
//! a four-state marker on each slot plus a packed head/tail cursor pair,
//! and contention surfaces as retries with a spin hint. `Full` and `Empty`
//! are ordinary results; the caller owns back-off policy.
//!
//! ```
//! use quadring::RingBuffer;
//!
//! let rb = RingBuffer::with_capacity(16);
//! rb.enqueue(7usize).unwrap();
//! assert_eq!(rb.dequeue().unwrap(), 7);
//! assert!(rb.is_empty());
//! ```

pub mod logger;
pub mod mpmc;

// Debug implementations for various types
pub mod debug {
    pub mod struct_debug;
}

pub use logger::{LogFields, NoopLogger, RingLogger, TracingLogger};
pub use mpmc::{DequeueError, EnqueueError, RingBuffer, RingBufferBuilder};
