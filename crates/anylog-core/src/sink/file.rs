//! File sink for troubleshooting
//!
//! Appends one timestamped line per call. Useful when stderr/stdout isn't
//! visible to whoever needs to read the output.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use parking_lot::Mutex;

use super::traits::{Joined, Sink};
use crate::error::AnyLogResult;
use crate::level::Level;

/// Environment variable naming the file used by [`FileSink::from_env`]
pub const FILE_ENV_VAR: &str = "ANYLOG_FILE";

/// Sink writing `[time] [LEVEL] [label] message` lines to a file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    label: String,
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) `path` in append mode
    pub fn new(path: impl AsRef<Path>) -> AnyLogResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = Self::open(&path)?;
        Ok(Self {
            path,
            label: "anylog".to_string(),
            file: Mutex::new(file),
        })
    }

    /// Open the file named by `ANYLOG_FILE`, or [`FileSink::default_path`]
    pub fn from_env() -> AnyLogResult<Self> {
        let path = std::env::var_os(FILE_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);
        Self::new(path)
    }

    /// Set the label written in the third column, usually the logger name
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// `<temp dir>/anylog.log`
    pub fn default_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push("anylog.log");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file and keep appending to the fresh one
    pub fn clear(&self) -> AnyLogResult<()> {
        File::create(&self.path)?;
        *self.file.lock() = Self::open(&self.path)?;
        Ok(())
    }

    fn open(path: &Path) -> std::io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    fn timestamp() -> String {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| {
                let secs = d.as_secs();
                let millis = d.subsec_millis();
                let hours = (secs % 86400) / 3600;
                let mins = (secs % 3600) / 60;
                let secs = secs % 60;
                format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
            })
            .unwrap_or_else(|_| "??:??:??.???".to_string())
    }

    fn append(&self, level: Level, args: &[&dyn Display]) {
        let mut file = self.file.lock();
        // A sink has nowhere to report its own failures.
        let _ = writeln!(
            file,
            "[{}] [{}] [{}] {}",
            Self::timestamp(),
            level,
            self.label,
            Joined(args)
        );
        let _ = file.flush();
    }
}

impl Sink for FileSink {
    fn trace(&self, args: &[&dyn Display]) {
        self.append(Level::Trace, args);
    }

    fn debug(&self, args: &[&dyn Display]) {
        self.append(Level::Debug, args);
    }

    fn log(&self, args: &[&dyn Display]) {
        self.append(Level::Log, args);
    }

    fn info(&self, args: &[&dyn Display]) {
        self.append(Level::Info, args);
    }

    fn warn(&self, args: &[&dyn Display]) {
        self.append(Level::Warn, args);
    }

    fn error(&self, args: &[&dyn Display]) {
        self.append(Level::Error, args);
    }
}
