//! No-op sink implementation

use std::fmt::Display;

use super::traits::Sink;

/// A sink that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn trace(&self, _args: &[&dyn Display]) {}
    fn debug(&self, _args: &[&dyn Display]) {}
    fn log(&self, _args: &[&dyn Display]) {}
    fn info(&self, _args: &[&dyn Display]) {}
    fn warn(&self, _args: &[&dyn Display]) {}
    fn error(&self, _args: &[&dyn Display]) {}
}
