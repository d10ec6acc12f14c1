//! Construction pipeline hooks
//!
//! A logger is built by three replaceable steps, always in this order:
//!
//! - `new(name)`: the bare logger, name bound, default threshold and sink
//! - `create(hooks, name, options)`: runs `new`, applies `options`, runs `ext`
//! - `ext(logger, options)`: final decoration (extra sink, level policy, ...)
//!
//! Swapping the base behavior only touches `new`, a cross-cutting decoration
//! only touches `ext`, and replacing the whole composition touches `create`.

use std::fmt;
use std::sync::Arc;

use crate::error::AnyLogResult;
use crate::logger::Logger;
use crate::options::Options;
use crate::sink::ConsoleSink;

/// Builds the bare logger for a name
pub type NewFn = Arc<dyn Fn(&str) -> AnyLogResult<Logger> + Send + Sync>;

/// Orchestrates `new`, option handling and `ext`
pub type CreateFn = Arc<dyn Fn(&Hooks, &str, &Options) -> AnyLogResult<Logger> + Send + Sync>;

/// Decorates a freshly built logger
pub type ExtFn = Arc<dyn Fn(Logger, &Options) -> AnyLogResult<Logger> + Send + Sync>;

/// The three pipeline steps a factory consults on a registry miss
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use anylog_core::{hooks, Hooks, Level, LoggerFactory, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let target = sink.clone();
/// let factory = LoggerFactory::with_hooks(Hooks::default().with_ext(move |logger, options| {
///     if options.get("capture").is_some() {
///         logger.set_sink(target.clone());
///     }
///     hooks::default_ext(logger, options)
/// }));
///
/// let options = anylog_core::Options::new().with_option("capture", true);
/// let log = factory.logger_with("app", &options).unwrap();
/// log.info(&[&"captured"]);
/// assert_eq!(sink.count(Level::Info), 1);
/// ```
#[derive(Clone)]
pub struct Hooks {
    new: NewFn,
    create: CreateFn,
    ext: ExtFn,
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            new: Arc::new(default_new),
            create: Arc::new(default_create),
            ext: Arc::new(default_ext),
        }
    }
}

impl Hooks {
    /// Replace the `new` step
    pub fn with_new<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> AnyLogResult<Logger> + Send + Sync + 'static,
    {
        self.new = Arc::new(f);
        self
    }

    /// Replace the `create` step
    pub fn with_create<F>(mut self, f: F) -> Self
    where
        F: Fn(&Hooks, &str, &Options) -> AnyLogResult<Logger> + Send + Sync + 'static,
    {
        self.create = Arc::new(f);
        self
    }

    /// Replace the `ext` step
    pub fn with_ext<F>(mut self, f: F) -> Self
    where
        F: Fn(Logger, &Options) -> AnyLogResult<Logger> + Send + Sync + 'static,
    {
        self.ext = Arc::new(f);
        self
    }

    /// Run the `new` step
    pub fn new_logger(&self, name: &str) -> AnyLogResult<Logger> {
        (self.new)(name)
    }

    /// Run the `create` step, which drives the whole pipeline
    pub fn create_logger(&self, name: &str, options: &Options) -> AnyLogResult<Logger> {
        (self.create)(self, name, options)
    }

    /// Run the `ext` step
    pub fn extend_logger(&self, logger: Logger, options: &Options) -> AnyLogResult<Logger> {
        (self.ext)(logger, options)
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

/// Base `new`: a logger writing to the console at the default threshold
pub fn default_new(name: &str) -> AnyLogResult<Logger> {
    Ok(Logger::new(name, Arc::new(ConsoleSink::new())))
}

/// Base `create`: `new`, then options, then `ext`
pub fn default_create(hooks: &Hooks, name: &str, options: &Options) -> AnyLogResult<Logger> {
    let logger = hooks.new_logger(name)?.with_options(options);
    hooks.extend_logger(logger, options)
}

/// Base `ext`: returns the logger unchanged
pub fn default_ext(logger: Logger, _options: &Options) -> AnyLogResult<Logger> {
    Ok(logger)
}
