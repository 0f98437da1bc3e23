use thiserror::Error;

/// Errors raised while configuring or running a lane layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {message}")]
    InvalidConfig { message: String },

    #[error("History entry '{id}' was added twice")]
    DuplicateEntry { id: String },

    #[error("Entry index {index} does not belong to this graph")]
    UnknownEntry { index: usize },

    #[error("Layout stalled with {} pending entries (cyclic history?): {pending:?}", pending.len())]
    Stalled { pending: Vec<String> },

    #[error("History entry '{id}' was reached a second time")]
    Revisited { id: String },
}

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

impl LayoutError {
    /// Create a new InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
