use thiserror::Error;

/// Producer-side failure of [`enqueue`](super::RingBuffer::enqueue).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnqueueError<T> {
    /// No writable slot was visible; the rejected payload is handed back.
    #[error("ring buffer is full")]
    Full(T),

    /// The publish CAS did not observe `WriteInProgress`. This transition
    /// must succeed under correct use; seeing it fail means an invariant
    /// was violated and the host should log and abort.
    #[error("enqueue raced: publish observed an unexpected slot state")]
    Raced,
}

impl<T> EnqueueError<T> {
    /// Recovers the payload from a [`Full`](EnqueueError::Full) rejection.
    pub fn into_inner(self) -> Option<T> {
        match self {
            Self::Full(item) => Some(item),
            Self::Raced => None,
        }
    }
}

/// Consumer-side failure of [`dequeue`](super::RingBuffer::dequeue).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DequeueError {
    /// No readable slot was visible.
    #[error("ring buffer is empty")]
    Empty,

    /// The release CAS did not observe `ReadInProgress`. Same contract as
    /// [`EnqueueError::Raced`].
    #[error("dequeue raced: release observed an unexpected slot state")]
    Raced,
}
