//! Error types for model generation.

use crate::naming::NamingScheme;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating or writing a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Non-positive dimension, bad split count or malformed demand table.
    #[error("Invalid input: {0}")]
    Input(String),

    /// An index the naming scheme cannot encode without collisions.
    #[error("{what} index {index} is outside 1..={max} supported by {scheme} naming")]
    Dimension {
        what: String,
        index: u32,
        max: u32,
        scheme: NamingScheme,
    },

    /// The output medium could not be acquired or written.
    #[error("Cannot write model to {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ModelError {
    pub(crate) fn input(message: impl Into<String>) -> Self {
        ModelError::Input(message.into())
    }

    /// Check if this error was raised by the naming scheme.
    pub fn is_dimension(&self) -> bool {
        matches!(self, ModelError::Dimension { .. })
    }
}

/// Result type alias for model generation.
pub type ModelResult<T> = Result<T, ModelError>;
