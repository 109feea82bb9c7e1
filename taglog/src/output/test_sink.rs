use std::sync::{Arc, Mutex};

use super::Sink;
use crate::level::Severity;

/// One sink invocation captured by a [`TestSink`].
#[derive(Clone, Debug)]
pub struct SinkRecord {
    /// Severity the sink was invoked with.
    pub severity: Severity,
    /// The buffer exactly as handed to the sink, terminator included.
    pub message: Vec<u8>,
    /// Number of content bytes, excluding the terminator.
    pub len: usize,
}

impl SinkRecord {
    /// The message content, without the line terminator.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.message[..self.len]
    }
}

/// A sink for testing that stores every dispatched message in memory.
///
/// Useful in tests that need to verify which messages actually reached the
/// sink and with which bytes.
#[derive(Debug)]
pub struct TestSink {
    records: Arc<Mutex<Vec<SinkRecord>>>,
}

impl TestSink {
    /// Creates a new test sink and a handle to its record storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taglog::TestSink;
    ///
    /// let (sink, records) = TestSink::new();
    /// taglog::set_leaked_sink(sink);
    /// taglog::warn!("captured");
    /// assert!(!records.lock().unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> (Self, Arc<Mutex<Vec<SinkRecord>>>) {
        let records = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                records: records.clone(),
            },
            records,
        )
    }
}

impl Sink for TestSink {
    fn write(&self, severity: Severity, message: &mut [u8], len: usize) {
        self.records.lock().unwrap().push(SinkRecord {
            severity,
            message: message.to_vec(),
            len,
        });
    }
}
