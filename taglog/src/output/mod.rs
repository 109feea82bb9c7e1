//! The output side of the pipeline: the sink contract and the process-wide
//! registry holding the runtime threshold, the tag prefix and the sink slot.
//!
//! # Registry
//!
//! All three pieces of state are last-writer-wins assignments that always
//! succeed. They are independent of each other and can be changed at any
//! time from any thread; changes are visible to the next dispatch.
//!
//! # Sinks
//!
//! Exactly one sink slot exists per process and nothing is registered by
//! default: messages that pass both gates are still rendered, then
//! discarded. Fan-out to several destinations is a sink implementation
//! concern, not a registry feature.

mod global;
mod stderr;
mod test_sink;

use core::fmt::Debug;

use crate::level::{LevelFilter, Severity};

pub use stderr::StderrSink;
#[doc(hidden)]
pub use test_sink::{SinkRecord, TestSink};

/// Receives every rendered message that passes both gates.
///
/// # Examples
///
/// ```rust
/// use taglog::{Severity, Sink};
///
/// #[derive(Debug)]
/// struct LineSink;
///
/// impl Sink for LineSink {
///     fn write(&self, severity: Severity, message: &mut [u8], len: usize) {
///         eprintln!("{severity}: {}", String::from_utf8_lossy(&message[..len]));
///     }
/// }
///
/// static SINK: LineSink = LineSink;
/// taglog::set_sink(&SINK);
/// ```
pub trait Sink: Debug {
    /// Handles one rendered message.
    ///
    /// `message` holds the rendered line followed by a line terminator;
    /// `len` is the number of bytes before the terminator. The buffer may be
    /// rewritten in place, up to its full length; the dispatcher drops it
    /// after this call returns, so mutations never leak into later messages.
    fn write(&self, severity: Severity, message: &mut [u8], len: usize);
}

/// Replaces the runtime output threshold.
///
/// The threshold can only restrict further what the compile-time floor
/// already allows; severities below [`COMPILE_THRESHOLD`] are physically
/// absent from the binary and no runtime setting can resurrect them.
/// [`LevelFilter::None`] silences everything without recompiling.
///
/// [`COMPILE_THRESHOLD`]: crate::COMPILE_THRESHOLD
pub fn set_output_level(level: LevelFilter) {
    global::set_output_level(level);
}

/// Returns the current runtime output threshold.
#[must_use]
pub fn output_level() -> LevelFilter {
    global::output_level()
}

/// Replaces the process-wide tag prefix; an empty string clears it.
///
/// The prefix namespaces every call-site tag, joined with a dot, and is
/// composed per message, so an update takes effect on the next dispatch.
pub fn set_tag_prefix(prefix: impl Into<String>) {
    global::set_tag_prefix(prefix.into());
}

/// Registers `sink` as the process-wide output sink, replacing any previous
/// one.
pub fn set_sink(sink: &'static (dyn Sink + Sync)) {
    global::set_sink(Some(sink));
}

/// Registers a sink by leaking it to obtain a `'static` reference.
///
/// This is a convenience for sinks built at runtime. Equivalent to
/// `set_sink(Box::leak(Box::new(sink)))`.
pub fn set_leaked_sink(sink: impl Sink + Sync + 'static) {
    global::set_sink(Some(Box::leak(Box::new(sink))));
}

/// Clears the sink slot; later messages are rendered and discarded.
pub fn clear_sink() {
    global::set_sink(None);
}

pub(crate) fn with_registry<R>(f: impl FnOnce(&str, Option<&'static (dyn Sink + Sync)>) -> R) -> R {
    global::read(f)
}
