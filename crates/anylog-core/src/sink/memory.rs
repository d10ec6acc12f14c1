//! In-memory recording sink

use std::fmt::Display;

use parking_lot::RwLock;

use super::traits::Sink;
use crate::level::Level;

/// One call received by a [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Sink method that was called
    pub level: Level,
    /// Each argument rendered with `Display`, in call order
    pub args: Vec<String>,
}

/// Sink that records every call, for tests and diagnostics
///
/// # Example
///
/// ```
/// use anylog_core::{Level, MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// sink.info(&[&"ready", &3]);
/// assert_eq!(sink.count(Level::Info), 1);
/// assert_eq!(sink.records()[0].args, vec!["ready", "3"]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RwLock<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of all recorded calls
    pub fn records(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// Number of calls received by the method for `level`
    pub fn count(&self, level: Level) -> usize {
        self.records.read().iter().filter(|r| r.level == level).count()
    }

    /// Total number of calls received
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        self.records.write().clear();
    }

    fn record(&self, level: Level, args: &[&dyn Display]) {
        let args = args.iter().map(|arg| arg.to_string()).collect();
        self.records.write().push(Record { level, args });
    }
}

impl Sink for MemorySink {
    fn trace(&self, args: &[&dyn Display]) {
        self.record(Level::Trace, args);
    }

    fn debug(&self, args: &[&dyn Display]) {
        self.record(Level::Debug, args);
    }

    fn log(&self, args: &[&dyn Display]) {
        self.record(Level::Log, args);
    }

    fn info(&self, args: &[&dyn Display]) {
        self.record(Level::Info, args);
    }

    fn warn(&self, args: &[&dyn Display]) {
        self.record(Level::Warn, args);
    }

    fn error(&self, args: &[&dyn Display]) {
        self.record(Level::Error, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_each_method() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.trace(&[&"a"]);
        sink.debug(&[&"b"]);
        sink.log(&[&"c"]);
        sink.info(&[&"d"]);
        sink.warn(&[&"e"]);
        sink.error(&[&"f", &1.5]);

        assert_eq!(sink.len(), 6);
        for level in Level::ALL {
            assert_eq!(sink.count(level), 1);
        }
        assert_eq!(
            sink.records().last(),
            Some(&Record {
                level: Level::Error,
                args: vec!["f".to_string(), "1.5".to_string()],
            })
        );

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_write_routes_by_level() {
        let sink = MemorySink::new();
        sink.write(Level::Warn, &[&"careful"]);
        assert_eq!(sink.count(Level::Warn), 1);
        assert_eq!(sink.len(), 1);
    }
}
