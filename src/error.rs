use std::io;
use std::path::PathBuf;
use thiserror::Error;

use fograph_layout::LayoutError;

/// Result type for gitfograph operations
pub type Result<T> = std::result::Result<T, FographError>;

/// Errors that can occur while reading history or writing a graph
#[derive(Error, Debug)]
pub enum FographError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write {path}: {source}")]
    FileWrite { path: PathBuf, source: io::Error },

    /// Error related to Git operations
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to parse configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// A captured log line that does not follow `id:timestamp:parents:message`
    #[error("Malformed log line {line}: {message}")]
    LogParse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FographError {
    pub fn log_parse(line: usize, message: impl Into<String>) -> Self {
        Self::LogParse {
            line,
            message: message.into(),
        }
    }
}
