//! anylog Core
//!
//! A small logging façade: ask for a logger by name, get the same shared
//! instance every time, and call it at any of six levels. Calls below the
//! logger's threshold are dropped; the rest go to a swappable [`Sink`].
//!
//! ## Construction pipeline
//!
//! A registry miss runs three replaceable [`Hooks`] in a fixed order:
//! `new` → `create` → `ext`. Extensions override only the step they care
//! about, either on a [`LoggerFactory`] they own or on the process-wide one.
//!
//! ```rust
//! use std::sync::Arc;
//! use anylog_core::{anylogger, anylogger_with, loggers, Level, Options};
//!
//! let log = anylogger("doc::app").unwrap();
//! assert!(Arc::ptr_eq(&log, &anylogger("doc::app").unwrap()));
//! assert!(loggers().contains("doc::app"));
//!
//! log.call(&[&"starting"]);                  // debug
//! log.call(&[&"info", &"listening on", &80]); // info
//!
//! let quiet = anylogger_with("doc::quiet", &Options::new().with_level(Level::Warn)).unwrap();
//! assert!(!quiet.enabled(Level::Info));
//! ```

pub mod level;
pub mod error;
pub mod sink;
pub mod options;
pub mod invocation;
pub mod logger;
pub mod registry;
pub mod hooks;
pub mod factory;

use std::sync::Arc;

use once_cell::sync::Lazy;

// Re-export commonly used types
pub use level::{Level, UnknownLevel};
pub use error::{AnyLogError, AnyLogResult, Stage};
pub use sink::{
    Sink, SharedSink, ConsoleSink, NoOpSink, MemorySink, Record, FileSink,
};
pub use options::Options;
pub use invocation::Invocation;
pub use logger::Logger;
pub use registry::Registry;
pub use hooks::Hooks;
pub use factory::{LoggerFactory, Resolved};

// Global factory instance
static GLOBAL_FACTORY: Lazy<LoggerFactory> = Lazy::new(LoggerFactory::new);

/// The process-wide factory, for replacing hooks
pub fn factory() -> &'static LoggerFactory {
    &GLOBAL_FACTORY
}

/// Get or create a logger from the process-wide factory
pub fn anylogger(name: &str) -> AnyLogResult<Arc<Logger>> {
    GLOBAL_FACTORY.logger(name)
}

/// Get or create a logger from the process-wide factory; `options` only apply on creation
pub fn anylogger_with(name: &str, options: &Options) -> AnyLogResult<Arc<Logger>> {
    GLOBAL_FACTORY.logger_with(name, options)
}

/// Every logger handed out by the process-wide factory
pub fn loggers() -> &'static Registry {
    GLOBAL_FACTORY.registry()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global factory is shared by every test thread, so each test uses
    // its own names and never clears the whole registry.

    #[test]
    fn test_global_identity() {
        let a = anylogger("lib::identity::a").unwrap();
        let b = anylogger("lib::identity::b").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &anylogger("lib::identity::a").unwrap()));
        assert!(loggers().contains("lib::identity::a"));
    }

    #[test]
    fn test_global_options_apply_once() {
        let log = anylogger_with("lib::options", &Options::new().with_level(Level::Warn)).unwrap();
        anylogger_with("lib::options", &Options::new().with_level(Level::Trace)).unwrap();
        assert_eq!(log.level(), Level::Warn);
    }

    #[test]
    fn test_global_delete_rebuilds() {
        let first = anylogger("lib::delete").unwrap();
        assert!(loggers().delete("lib::delete").is_some());
        let second = anylogger("lib::delete").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_factory_call_matches_free_functions() {
        let log = anylogger("lib::call").unwrap();
        let resolved = factory().call(Some("lib::call"), None).unwrap();
        assert!(Arc::ptr_eq(&resolved.into_logger().unwrap(), &log));

        let registry = factory().call(None, None).unwrap().into_registry().unwrap();
        assert!(std::ptr::eq(registry, loggers()));
    }
}
