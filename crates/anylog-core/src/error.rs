//! Error types

use thiserror::Error;

/// Stage of the construction pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    New,
    Create,
    Ext,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::New => write!(f, "new"),
            Stage::Create => write!(f, "create"),
            Stage::Ext => write!(f, "ext"),
        }
    }
}

/// Errors that can occur while constructing a logger
///
/// Dispatch never fails; only construction and configuration loading do.
#[derive(Error, Debug)]
pub enum AnyLogError {
    /// A construction hook refused to build the logger
    #[error("{stage} hook failed for logger '{name}': {message}")]
    Hook {
        stage: Stage,
        name: String,
        message: String,
    },

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    InvalidYamlOptions(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnyLogError {
    /// Create a hook error
    pub fn hook(stage: Stage, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Hook {
            stage,
            name: name.into(),
            message: message.into(),
        }
    }
}

pub type AnyLogResult<T> = Result<T, AnyLogError>;
