//! Diagnostic formatting for conversion failures
//!
//! A failed parse is the only fatal outcome the converter has; everything
//! else degrades to inline placeholders. The diagnostic is rendered three
//! ways: as the Java comment that becomes the whole output, as plain text
//! for the explanation pane, and as JSON for tooling.

use serde::Serialize;

use crate::error::PyjamaError;

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    /// Java comment form, e.g. `/* Python syntax error at line 3: ... */`
    pub fn to_comment(&self) -> String {
        format!("/* {} */", self.to_text())
    }

    /// Plain-text form, e.g. `Python syntax error at line 3: ...`
    pub fn to_text(&self) -> String {
        format!(
            "Python syntax error at line {}: {}",
            self.line, self.message
        )
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub fn from_error(err: &PyjamaError) -> Diagnostic {
    match err {
        PyjamaError::Parse { line, message } => Diagnostic {
            line: *line,
            message: message.clone(),
        },
        other => Diagnostic {
            line: 1,
            message: other.to_string(),
        },
    }
}
