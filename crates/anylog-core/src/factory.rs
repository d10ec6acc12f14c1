//! Logger factory: registry lookup plus the construction pipeline

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::AnyLogResult;
use crate::hooks::Hooks;
use crate::logger::Logger;
use crate::options::Options;
use crate::registry::Registry;

/// What a [`LoggerFactory::call`] resolved to
#[derive(Debug)]
pub enum Resolved<'a> {
    /// No name given: the registry itself, for inspection and management
    Registry(&'a Registry),
    /// The logger for the given name
    Logger(Arc<Logger>),
}

impl<'a> Resolved<'a> {
    pub fn into_logger(self) -> Option<Arc<Logger>> {
        match self {
            Resolved::Logger(logger) => Some(logger),
            Resolved::Registry(_) => None,
        }
    }

    pub fn into_registry(self) -> Option<&'a Registry> {
        match self {
            Resolved::Registry(registry) => Some(registry),
            Resolved::Logger(_) => None,
        }
    }
}

/// Hands out one shared logger per name
///
/// On a registry miss the `create` hook builds the logger, which is stored and
/// returned. On a hit the stored logger is returned and options are ignored.
///
/// Hooks may request other loggers from this factory or inspect its registry;
/// requesting the logger that is being constructed never returns.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use anylog_core::{Level, LoggerFactory, Options};
///
/// let factory = LoggerFactory::new();
/// let a = factory.logger_with("db", &Options::new().with_level(Level::Info)).unwrap();
/// let b = factory.logger_with("db", &Options::new().with_level(Level::Error)).unwrap();
///
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(b.level(), Level::Info);
/// assert_eq!(factory.registry().names(), vec!["db"]);
/// ```
#[derive(Debug, Default)]
pub struct LoggerFactory {
    registry: Registry,
    hooks: RwLock<Hooks>,
}

impl LoggerFactory {
    /// Create a factory with an empty registry and the default pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory with an empty registry and the given pipeline
    pub fn with_hooks(hooks: Hooks) -> Self {
        Self {
            registry: Registry::new(),
            hooks: RwLock::new(hooks),
        }
    }

    /// The registry of every logger this factory has handed out
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Current pipeline
    pub fn hooks(&self) -> Hooks {
        self.hooks.read().clone()
    }

    /// Replace the whole pipeline; existing loggers are unaffected
    pub fn set_hooks(&self, hooks: Hooks) {
        *self.hooks.write() = hooks;
    }

    pub fn set_new<F>(&self, f: F)
    where
        F: Fn(&str) -> AnyLogResult<Logger> + Send + Sync + 'static,
    {
        let mut hooks = self.hooks.write();
        *hooks = hooks.clone().with_new(f);
    }

    pub fn set_create<F>(&self, f: F)
    where
        F: Fn(&Hooks, &str, &Options) -> AnyLogResult<Logger> + Send + Sync + 'static,
    {
        let mut hooks = self.hooks.write();
        *hooks = hooks.clone().with_create(f);
    }

    pub fn set_ext<F>(&self, f: F)
    where
        F: Fn(Logger, &Options) -> AnyLogResult<Logger> + Send + Sync + 'static,
    {
        let mut hooks = self.hooks.write();
        *hooks = hooks.clone().with_ext(f);
    }

    /// Get or create the logger for `name` with default options
    pub fn logger(&self, name: &str) -> AnyLogResult<Arc<Logger>> {
        self.logger_with(name, &Options::default())
    }

    /// Get or create the logger for `name`; `options` only apply on creation
    pub fn logger_with(&self, name: &str, options: &Options) -> AnyLogResult<Arc<Logger>> {
        if let Some(existing) = self.registry.get(name) {
            return Ok(existing);
        }
        let hooks = self.hooks();
        self.registry
            .get_or_try_insert_with(name, || hooks.create_logger(name, options))
    }

    /// Single entry point: the registry without a name, a logger with one
    pub fn call(&self, name: Option<&str>, options: Option<&Options>) -> AnyLogResult<Resolved<'_>> {
        match name {
            None => Ok(Resolved::Registry(&self.registry)),
            Some(name) => {
                let logger = match options {
                    Some(options) => self.logger_with(name, options)?,
                    None => self.logger(name)?,
                };
                Ok(Resolved::Logger(logger))
            }
        }
    }
}
