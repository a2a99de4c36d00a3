mod builder;
mod consumer;
mod error;
mod producer;

pub use builder::RingBufferBuilder;
pub use error::{DequeueError, EnqueueError};

pub mod buffer {
    pub mod layout;
    pub mod ring;
    pub mod ring_impl;
    pub use ring::{RingBuffer, Slot}; // re-export for stable path
}

pub use buffer::RingBuffer;
