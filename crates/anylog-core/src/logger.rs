//! Named, level-gated logger handles

use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::RwLock;
use serde_json::Value;

use crate::invocation::Invocation;
use crate::level::Level;
use crate::options::Options;
use crate::sink::SharedSink;

/// A named logger
///
/// Calls below the logger's level are dropped; everything else is forwarded
/// to the sink method for the call's level with the arguments untouched.
///
/// Loggers are handed out as `Arc<Logger>` by the factory, and every caller
/// asking for the same name shares one instance.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use anylog_core::{Level, Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let log = Logger::new("db", sink.clone());
///
/// log.call(&[&"connected"]);          // debug
/// log.call(&[&"info", &"ready"]);     // info
/// log.trace(&[&"dropped"]);           // below the default threshold
///
/// assert_eq!(sink.count(Level::Debug), 1);
/// assert_eq!(sink.count(Level::Info), 1);
/// assert_eq!(sink.count(Level::Trace), 0);
/// ```
pub struct Logger {
    name: String,
    level: AtomicU8,
    sink: RwLock<SharedSink>,
    options: Options,
}

impl Logger {
    /// Threshold of a logger nobody configured
    pub const DEFAULT_LEVEL: Level = Level::Debug;

    /// Create a logger writing to `sink` at the default threshold
    pub fn new(name: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(Self::DEFAULT_LEVEL as u8),
            sink: RwLock::new(sink),
            options: Options::default(),
        }
    }

    /// Apply construction options: the level, if any, and the pass-through keys
    pub fn with_options(mut self, options: &Options) -> Self {
        if let Some(level) = options.level {
            self.set_level(level);
        }
        self.options = options.clone();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current dispatch threshold
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a call at `level` would reach the sink
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Options the logger was constructed with
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Pass-through construction option
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn sink(&self) -> SharedSink {
        self.sink.read().clone()
    }

    /// Swap the backend; later calls go to `sink`
    pub fn set_sink(&self, sink: SharedSink) {
        *self.sink.write() = sink;
    }

    /// Forward `args` to the sink if `level` passes the threshold
    pub fn dispatch(&self, level: Level, args: &[&dyn Display]) {
        if !self.enabled(level) {
            return;
        }
        let sink = self.sink();
        sink.write(level, args);
    }

    /// Dispatch a call whose level was resolved by the caller
    pub fn invoke(&self, invocation: Invocation<'_, '_>) {
        self.dispatch(invocation.level(), invocation.args());
    }

    /// Call the logger directly.
    ///
    /// When more than one argument is given and the first one's text is exactly
    /// a level name, it selects that level and is not forwarded; otherwise all
    /// arguments go out at `debug`.
    pub fn call(&self, args: &[&dyn Display]) {
        self.invoke(Invocation::from_args(args));
    }

    pub fn trace(&self, args: &[&dyn Display]) {
        self.dispatch(Level::Trace, args);
    }

    pub fn debug(&self, args: &[&dyn Display]) {
        self.dispatch(Level::Debug, args);
    }

    pub fn log(&self, args: &[&dyn Display]) {
        self.dispatch(Level::Log, args);
    }

    pub fn info(&self, args: &[&dyn Display]) {
        self.dispatch(Level::Info, args);
    }

    pub fn warn(&self, args: &[&dyn Display]) {
        self.dispatch(Level::Warn, args);
    }

    pub fn error(&self, args: &[&dyn Display]) {
        self.dispatch(Level::Error, args);
    }

    /// Log pre-formatted arguments, as produced by `format_args!`
    pub fn trace_fmt(&self, args: fmt::Arguments<'_>) {
        self.trace(&[&args]);
    }

    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.debug(&[&args]);
    }

    pub fn log_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(&[&args]);
    }

    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.info(&[&args]);
    }

    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.warn(&[&args]);
    }

    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.error(&[&args]);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("options", &self.options)
            .finish()
    }
}

/// Convenience macros for logging with format arguments
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_log {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error_fmt(format_args!($($arg)*))
    };
}

/// Call a logger directly with any number of `Display` arguments
///
/// `log_call!(log, "info", "ready", 3)` is `log.call(&[&"info", &"ready", &3])`.
#[macro_export]
macro_rules! log_call {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.call(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::sink::MemorySink;

    fn logger() -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Logger::new("test", sink.clone()), sink)
    }

    #[test]
    fn test_name_and_default_level() {
        let (log, _) = logger();
        assert_eq!(log.name(), "test");
        assert_eq!(log.level(), Level::Debug);
    }

    #[test]
    fn test_direct_call_defaults_to_debug() {
        let (log, sink) = logger();
        log.call(&[&"message"]);
        assert_eq!(sink.count(Level::Log), 0);
        assert_eq!(sink.count(Level::Debug), 1);
    }

    #[test]
    fn test_direct_call_with_level_name() {
        let (log, sink) = logger();
        log.call(&[&"info", &"message"]);
        assert_eq!(sink.count(Level::Debug), 0);
        assert_eq!(sink.count(Level::Info), 1);
        assert_eq!(sink.records()[0].args, vec!["message"]);
    }

    #[test]
    fn test_direct_call_with_only_a_level_name() {
        let (log, sink) = logger();
        log.call(&[&"error"]);
        assert_eq!(sink.count(Level::Error), 0);
        assert_eq!(sink.records()[0].level, Level::Debug);
        assert_eq!(sink.records()[0].args, vec!["error"]);
    }

    #[test]
    fn test_arguments_pass_through_in_order() {
        let (log, sink) = logger();
        log.warn(&[&"disk", &93, &"% full"]);
        assert_eq!(sink.records()[0].args, vec!["disk", "93", "% full"]);
    }

    #[test]
    fn test_threshold_drops_lower_levels() {
        let (log, sink) = logger();
        log.set_level(Level::Warn);

        log.trace(&[&"a"]);
        log.debug(&[&"b"]);
        log.log(&[&"c"]);
        log.info(&[&"d"]);
        log.call(&[&"e"]);
        assert!(sink.is_empty());

        log.warn(&[&"f"]);
        log.error(&[&"g"]);
        log.call(&[&"error", &"h"]);
        assert_eq!(sink.count(Level::Warn), 1);
        assert_eq!(sink.count(Level::Error), 2);
    }

    #[test]
    fn test_every_method_targets_its_level() {
        let (log, sink) = logger();
        log.set_level(Level::Trace);
        log.trace(&[&"x"]);
        log.debug(&[&"x"]);
        log.log(&[&"x"]);
        log.info(&[&"x"]);
        log.warn(&[&"x"]);
        log.error(&[&"x"]);
        for level in Level::ALL {
            assert_eq!(sink.count(level), 1, "{:?}", level);
        }
    }

    #[test]
    fn test_with_options() {
        let (log, _) = logger();
        let log = log.with_options(&Options::new().with_level(Level::Info).with_option("color", false));
        assert_eq!(log.level(), Level::Info);
        assert_eq!(log.option("color"), Some(&Value::Bool(false)));
        assert!(!log.enabled(Level::Log));
        assert!(log.enabled(Level::Info));
    }

    #[test]
    fn test_options_without_level_keep_default() {
        let (log, _) = logger();
        let log = log.with_options(&Options::new().with_option("color", true));
        assert_eq!(log.level(), Level::Debug);
    }

    #[test]
    fn test_set_sink() {
        let (log, first) = logger();
        let second = Arc::new(MemorySink::new());
        log.set_sink(second.clone());
        log.info(&[&"moved"]);
        assert!(first.is_empty());
        assert_eq!(second.count(Level::Info), 1);
    }

    #[test]
    fn test_macros() {
        let (log, sink) = logger();
        let log = Arc::new(log);
        crate::log_info!(log, "{} rows in {}ms", 12, 4);
        crate::log_call!(log, "warn", "slow query", 4);
        crate::log_trace!(log, "dropped");

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].args, vec!["12 rows in 4ms"]);
        assert_eq!(records[1].level, Level::Warn);
        assert_eq!(records[1].args, vec!["slow query", "4"]);
    }
}
