//! Error types for the Pyjama converter

use thiserror::Error;

/// Main error type for Pyjama
#[derive(Debug, Error)]
pub enum PyjamaError {
    #[error("Python syntax error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("{message}")]
    Render { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PyjamaError>;

impl PyjamaError {
    pub fn render(message: impl Into<String>) -> Self {
        PyjamaError::Render {
            message: message.into(),
        }
    }
}
