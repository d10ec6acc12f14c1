//! Sink trait definition

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::level::Level;

/// Backend that receives dispatched log calls
///
/// One write method per level, each taking the caller's arguments unmodified
/// and in order. Formatting is entirely up to the sink.
///
/// Implementations:
/// - `ConsoleSink`: Writes to stdout/stderr
/// - `NoOpSink`: Discards everything
/// - `MemorySink`: Records calls for inspection
/// - `FileSink`: Appends timestamped lines to a file
pub trait Sink: Send + Sync {
    fn trace(&self, args: &[&dyn Display]);

    fn debug(&self, args: &[&dyn Display]);

    fn log(&self, args: &[&dyn Display]);

    fn info(&self, args: &[&dyn Display]);

    fn warn(&self, args: &[&dyn Display]);

    fn error(&self, args: &[&dyn Display]);

    /// Route a call to the method named after `level`
    fn write(&self, level: Level, args: &[&dyn Display]) {
        match level {
            Level::Trace => self.trace(args),
            Level::Debug => self.debug(args),
            Level::Log => self.log(args),
            Level::Info => self.info(args),
            Level::Warn => self.warn(args),
            Level::Error => self.error(args),
        }
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;

/// Displays an argument list the way a console does: space separated
pub struct Joined<'a, 'b>(pub &'a [&'b dyn Display]);

impl Display for Joined<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}
