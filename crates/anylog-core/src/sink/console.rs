//! Console sink implementation

use std::fmt::Display;

use super::traits::{Joined, Sink};

/// A sink that outputs to the console
///
/// `log` and `info` go to stdout, everything else to stderr.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    prefix: Option<String>,
}

impl ConsoleSink {
    /// Create a console sink that prints arguments as-is
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create a console sink that prepends `prefix` to every line
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn line(&self, args: &[&dyn Display]) -> String {
        match &self.prefix {
            Some(prefix) => format!("{} {}", prefix, Joined(args)),
            None => Joined(args).to_string(),
        }
    }
}

impl Sink for ConsoleSink {
    fn trace(&self, args: &[&dyn Display]) {
        eprintln!("{}", self.line(args));
    }

    fn debug(&self, args: &[&dyn Display]) {
        eprintln!("{}", self.line(args));
    }

    fn log(&self, args: &[&dyn Display]) {
        println!("{}", self.line(args));
    }

    fn info(&self, args: &[&dyn Display]) {
        println!("{}", self.line(args));
    }

    fn warn(&self, args: &[&dyn Display]) {
        eprintln!("{}", self.line(args));
    }

    fn error(&self, args: &[&dyn Display]) {
        eprintln!("{}", self.line(args));
    }
}
