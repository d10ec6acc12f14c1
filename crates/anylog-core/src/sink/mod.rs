//! Sinks: the backends that dispatched log calls are written to

mod traits;
mod noop;
mod console;
mod memory;
mod file;

pub use traits::{Sink, SharedSink, Joined};
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use memory::{MemorySink, Record};
pub use file::{FileSink, FILE_ENV_VAR};
