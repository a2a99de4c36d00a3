use super::buffer::RingBuffer;
use crate::logger::{NoopLogger, RingLogger};

const DEFAULT_CAPACITY: u32 = 1024;

/// Options bag for ring construction.
pub struct RingBufferBuilder {
    capacity: u32,
    debug_mode: bool,
    logger: Box<dyn RingLogger>,
}

impl Default for RingBufferBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            debug_mode: false,
            logger: Box::new(NoopLogger),
        }
    }
}

impl RingBufferBuilder {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn with_debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn with_logger(mut self, logger: Box<dyn RingLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn build<T>(self) -> RingBuffer<T> {
        RingBuffer::with_options(self.capacity, self.debug_mode, self.logger)
    }
}
