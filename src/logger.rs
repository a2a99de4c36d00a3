//! Structured logging collaborator for the ring buffer.
//!
//! The core emits three kinds of diagnostics: advisory trace events when
//! debug mode is on, warnings ahead of an invariant-violation report, and a
//! fatal channel for the violation itself. Hosts plug in their own sink
//! through [`RingLogger`]; the buffer never logs `Full`/`Empty` outcomes.

/// Structured diagnostic fields: name/value pairs carrying cursor and
/// capacity state at the time of the event.
pub type LogFields<'a> = &'a [(&'static str, u64)];

/// Sink for the ring's diagnostics.
///
/// `fatal` reports a violated invariant and must not return; continuing
/// past one would silently corrupt callers, so the signature diverges.
pub trait RingLogger: Send + Sync {
    /// Advisory trace event. Emitted only in debug mode; must not affect
    /// correctness or ordering.
    fn debug(&self, message: &str, fields: LogFields<'_>);

    /// Precedes a fatal report with the same fields.
    fn warn(&self, message: &str, fields: LogFields<'_>);

    /// Reports an invariant violation and terminates.
    fn fatal(&self, message: &str, fields: LogFields<'_>) -> !;

    /// Flushes and releases any resources held by the sink. Idempotent.
    fn close(&self) {}
}

/// Default sink: discards debug and warn events. `fatal` still writes the
/// report to stderr before aborting the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl RingLogger for NoopLogger {
    fn debug(&self, _message: &str, _fields: LogFields<'_>) {}

    fn warn(&self, _message: &str, _fields: LogFields<'_>) {}

    fn fatal(&self, message: &str, fields: LogFields<'_>) -> ! {
        eprintln!("fatal: {message} {fields:?}");
        std::process::abort()
    }
}

/// Sink that routes through the [`tracing`] facade. `fatal` emits at error
/// level, then aborts the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl RingLogger for TracingLogger {
    fn debug(&self, message: &str, fields: LogFields<'_>) {
        tracing::debug!(target: "quadring", ?fields, "{message}");
    }

    fn warn(&self, message: &str, fields: LogFields<'_>) {
        tracing::warn!(target: "quadring", ?fields, "{message}");
    }

    fn fatal(&self, message: &str, fields: LogFields<'_>) -> ! {
        tracing::error!(target: "quadring", ?fields, "{message}");
        std::process::abort()
    }
}
