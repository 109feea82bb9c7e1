//! # `taglog`
//!
//! A minimal, embeddable logging facade: call sites emit leveled, tagged
//! messages cheaply, the build decides which messages exist at all, and the
//! running process decides which of the surviving ones are emitted.
//!
//! ## Pipeline
//!
//! Every emission passes two gates. The compile-time gate compares the
//! severity against [`COMPILE_THRESHOLD`], a constant resolved from the
//! `level-*` cargo features (falling back to `debug` for builds with debug
//! assertions and `info` for optimized builds); call sites below it are dead
//! code and cost nothing at runtime, not even argument evaluation. The
//! runtime gate compares against the output threshold, which starts at
//! [`LevelFilter::Verbose`] and can be raised at any time, up to
//! [`LevelFilter::None`], which silences everything without recompiling.
//! It can only restrict further what the build compiled in, never relax it.
//!
//! Messages that pass both gates are rendered once and handed to the single
//! process-wide [`Sink`]. With no sink registered they are rendered and
//! discarded; registering a sink is how output actually leaves the process.
//!
//! ## Basic usage
//!
//! ```rust
//! use taglog::{LevelFilter, StderrSink};
//!
//! taglog::set_sink(&StderrSink::DEFAULT);
//! taglog::set_output_level(LevelFilter::Info);
//! taglog::set_tag_prefix("APP");
//!
//! let port = 8080;
//! taglog::info!(tag: "NET", "listening on port {port}");
//! taglog::debug!("dropped by the output threshold");
//! ```
//!
//! Tags are opaque strings naming a message's origin. The process-wide tag
//! prefix namespaces them: with prefix `"APP"` the call above carries the
//! effective tag `APP.NET`.
//!
//! ## Expensive arguments
//!
//! Arguments of a suppressed call site below the compile-time floor are
//! never evaluated. For work that should also be skipped when only the
//! runtime threshold filters the message, guard it explicitly:
//!
//! ```rust
//! use taglog::Severity;
//!
//! # fn checksum(_: &[u8]) -> u64 { 0 }
//! # let payload = [0u8; 16];
//! if taglog::output_allowed(Severity::Debug) {
//!     taglog::debug!("payload checksum: {:016x}", checksum(&payload));
//! }
//! ```
//!
//! ## Source metadata
//!
//! Builds with debug assertions prepend the calling function and a
//! `file:line` locator to each rendered message; optimized builds render
//! severity, tag and message only. The severity itself always travels
//! out-of-band as the sink's first parameter.

#[doc(hidden)]
pub mod dispatch;
mod filter;
mod level;
#[doc(hidden)]
pub mod macro_helpers;
mod macros;
mod output;

pub use filter::{COMPILE_THRESHOLD, allowed, output_allowed};
pub use level::{LevelFilter, ParseLevelFilterError, Severity};
#[doc(hidden)]
pub use output::{SinkRecord, TestSink};
pub use output::{
    Sink, StderrSink, clear_sink, output_level, set_leaked_sink, set_output_level, set_sink,
    set_tag_prefix,
};
