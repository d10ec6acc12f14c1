//! Log levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Log levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace = 0,
    #[default]
    Debug = 1,
    Log = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
}

impl Level {
    /// Every level, in severity order
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Log,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    /// The lowercase name used at call sites and in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Log => "log",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Exact match against the level names, as used by the call-site selector.
    ///
    /// `"INFO"` or `" info"` are not level names here; they are message text.
    pub fn from_name(name: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.as_str() == name)
    }

    pub(crate) fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Log,
            3 => Level::Info,
            4 => Level::Warn,
            _ => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Trace => write!(f, "TRACE"),
            Level::Debug => write!(f, "DEBUG"),
            Level::Log => write!(f, "LOG  "),
            Level::Info => write!(f, "INFO "),
            Level::Warn => write!(f, "WARN "),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// Returned by [`Level::from_str`] for anything that is not a level name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown log level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    /// Case-insensitive parse for configuration values (env vars, files)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(&s.trim().to_lowercase()).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
