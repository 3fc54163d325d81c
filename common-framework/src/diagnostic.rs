use crate::Position;
use thiserror::Error;

/// A recoverable problem found in the input.
///
/// Diagnostics are not engine failures. A grammar records them in its own
/// environment and keeps going; how they are shown to a user is up to the
/// client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct Diagnostic {
    /// Where the offending token starts.
    pub position: Position,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    pub fn new<S: Into<String>>(position: Position, message: S) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}
