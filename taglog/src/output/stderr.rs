use std::io::Write;

use super::Sink;
use crate::level::Severity;

/// Sink that writes every message to standard error, prefixed with the
/// single-letter severity marker.
///
/// Write errors are swallowed; a logger that complains about its own output
/// channel would only loop on itself.
///
/// # Examples
///
/// ```rust
/// use taglog::StderrSink;
///
/// taglog::set_sink(&StderrSink::DEFAULT);
/// taglog::info!("now visible on stderr");
/// ```
#[derive(Debug, Default)]
pub struct StderrSink(());

impl StderrSink {
    /// A `const` version of `StderrSink::default()` to allow use as a
    /// `&'static`.
    pub const DEFAULT: Self = StderrSink(());
}

impl Sink for StderrSink {
    fn write(&self, severity: Severity, message: &mut [u8], len: usize) {
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "{} ", severity.marker());
        let _ = stderr.write_all(&message[..len]);
        let _ = stderr.write_all(b"\n");
    }
}
